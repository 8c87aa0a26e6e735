//! Two-pass emission of a composed document

use crate::composing::Composed;
use crate::formatting::*;

/// We do the emission in two passes. First we flatten the composed tree into
/// a Vec of pieces in document order. Then second we apply the specified
/// renderer to each piece and concatenate the results. Every renderer thus
/// sees the table of contents first and the body after it, and nothing else.
pub fn render(renderer: &impl Render, composed: &Composed) -> String {
    // Pass 1: composed tree to pieces
    let pieces = flatten(composed);

    // Pass 2: pieces to markup
    let mut output = String::new();
    for piece in &pieces {
        output.push_str(&renderer.style(piece));
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output
}
