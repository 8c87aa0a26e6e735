//! First pass of emission: turn a composed document into a flat stream of
//! pieces that any renderer can style.

mod formatter;
mod piece;

pub use formatter::flatten;
pub use piece::*;
