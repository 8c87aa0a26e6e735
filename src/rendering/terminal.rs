//! Plain text with colour, for reading a form in the terminal

use owo_colors::OwoColorize;

use crate::formatting::*;
use crate::language::Level;

/// Embellish the plain text rendering with ANSI escapes: headings in bold,
/// defined terms and references in colour, blanks and annotations
/// highlighted.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, piece: &Piece) -> String {
        match piece {
            Piece::ContentsStart => "Table of Contents"
                .bold()
                .to_string()
                + "\n",
            Piece::SectionStart {
                depth,
                ordinals,
                heading,
                conspicuous,
                ..
            } => {
                let number = label(ordinals);
                let title = heading.unwrap_or("");
                let line = if *conspicuous {
                    format!("{} {}", number.bold(), title.to_uppercase().bold())
                } else {
                    format!("{} {}", number.bold(), title.bold())
                };
                format!("{}{}\n", indent(depth - 1), line.trim_end())
            }
            Piece::Provenance(_) => Render::style(&Identity, piece)
                .dimmed()
                .to_string(),
            Piece::Annotation { depth, annotation } => {
                let level = match annotation.level {
                    Level::Error => annotation
                        .level
                        .bright_red()
                        .to_string(),
                    Level::Warning => annotation
                        .level
                        .yellow()
                        .to_string(),
                    Level::Notice | Level::Info => annotation
                        .level
                        .bright_blue()
                        .to_string(),
                };
                format!("{}{}: {}\n", indent(*depth), level, annotation.message)
            }
            Piece::Definition { term, .. } => format!("\"{}\"", term)
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Piece::Use { term, .. } => term
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .to_string(),
            Piece::Reference(heading) => heading
                .italic()
                .to_string(),
            Piece::Blank { value, .. } => match value {
                Some(value) => value
                    .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                    .underline()
                    .to_string(),
                None => "[•]"
                    .color(owo_colors::Rgb(0xf5, 0x79, 0x00))
                    .bold()
                    .to_string(),
            },
            Piece::CommentStart { .. } => Render::style(&Identity, piece)
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            _ => Render::style(&Identity, piece),
        }
    }
}
