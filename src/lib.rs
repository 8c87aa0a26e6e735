//! Render legal forms with their annotations, comments and blank values
//! overlaid, as interactive HTML, printable Typst, or plain text.

#[macro_use]
mod regex;

pub mod composing;
pub mod formatting;
pub mod grouping;
pub mod hashing;
pub mod language;
pub mod loading;
pub mod rendering;
pub mod settings;
pub mod templating;
pub mod threading;
