//! Compose a resolved form with its content-address tree, its authored
//! original, and the annotations, comments, blank values and resolutions
//! computed about it, into one tree ready for an emitter.

pub mod anchors;
mod composer;
mod contents;
mod types;

pub use composer::{compose, Options};
pub use types::*;
