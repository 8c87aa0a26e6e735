//! Renderers turning composed forms into text, terminal, HTML and Typst
//! output

mod html;
mod numbering;
mod renderer;
mod terminal;
mod typst;

pub use html::Html;
pub use numbering::label;
pub use renderer::render;
pub use terminal::Terminal;
pub use typst::Typst;

pub(crate) use typst::escape_typst;
