//! The stream of structural pieces every emitter consumes

use crate::composing::Provenance;
use crate::language::{Annotation, Comment, Path};

/// One step of the walk over a composed document. Emitters see exactly
/// this sequence, so they can differ in presentation but never in structure.
///
/// `depth` is the nesting level: 0 for the top of the document, 1 for its
/// child forms, and so on.
#[derive(Debug, Clone, PartialEq)]
pub enum Piece<'d> {
    ContentsStart,
    EntriesStart {
        depth: usize,
    },
    Entry {
        depth: usize,
        heading: Option<&'d str>,
    },
    EntryEnd {
        depth: usize,
    },
    EntriesEnd {
        depth: usize,
    },
    ContentsEnd,
    BodyStart,
    SectionStart {
        depth: usize,
        /// One-origin position within each enclosing series, outermost first.
        ordinals: Vec<usize>,
        /// One-origin index of the top-level series the section sits in.
        series: usize,
        heading: Option<&'d str>,
        conspicuous: bool,
        component: bool,
    },
    Provenance(&'d Provenance<'d>),
    ChildLink(&'d str),
    SectionEnd {
        depth: usize,
    },
    Annotation {
        depth: usize,
        annotation: &'d Annotation,
    },
    ParagraphStart {
        depth: usize,
    },
    ParagraphEnd {
        depth: usize,
    },
    Text(&'d str),
    Definition {
        term: &'d str,
        anchor: Option<&'d str>,
    },
    Use {
        term: &'d str,
        anchor: Option<&'d str>,
    },
    Reference(&'d str),
    Blank {
        path: &'d Path,
        value: Option<&'d str>,
    },
    CommentStart {
        depth: usize,
        comment: &'d Comment,
    },
    CommentEnd {
        depth: usize,
    },
    BodyEnd,
}

/// Trait for the different output backends (plain text, ANSI escapes for
/// the terminal, HTML for interactive display, Typst for print).
pub trait Render {
    /// Produce the markup for one piece.
    fn style(&self, piece: &Piece) -> String;
}

/// Plain text, no markup.
pub struct Identity;

pub(crate) fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

pub(crate) fn label(ordinals: &[usize]) -> String {
    ordinals
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

impl Render for Identity {
    fn style(&self, piece: &Piece) -> String {
        match piece {
            Piece::ContentsStart => "Table of Contents\n".to_string(),
            Piece::Entry { depth, heading } => {
                format!("{}- {}\n", indent(*depth), heading.unwrap_or("(No Heading)"))
            }
            Piece::ContentsEnd => "\n".to_string(),
            Piece::SectionStart {
                depth,
                ordinals,
                heading,
                ..
            } => match heading {
                Some(heading) => format!("{}{} {}\n", indent(depth - 1), label(ordinals), heading),
                None => format!("{}{}\n", indent(depth - 1), label(ordinals)),
            },
            Piece::Provenance(provenance) => match provenance.upgraded_from {
                Some(specified) => format!(
                    "[{}/{} {}, upgraded from {}]\n",
                    provenance.publisher, provenance.project, provenance.edition, specified
                ),
                None => format!(
                    "[{}/{} {}]\n",
                    provenance.publisher, provenance.project, provenance.edition
                ),
            },
            Piece::Annotation { depth, annotation } => {
                format!("{}[{}] {}\n", indent(*depth), annotation.level, annotation.message)
            }
            Piece::ParagraphStart { depth } => indent(*depth),
            Piece::ParagraphEnd { .. } => "\n".to_string(),
            Piece::Text(text) => text.to_string(),
            Piece::Definition { term, .. } => format!("\"{}\"", term),
            Piece::Use { term, .. } => term.to_string(),
            Piece::Reference(heading) => heading.to_string(),
            Piece::Blank { value, .. } => match value {
                Some(value) => value.to_string(),
                None => "[•]".to_string(),
            },
            Piece::CommentStart { depth, comment } => format!(
                "{}> {} ({})\n",
                indent(*depth),
                comment.text,
                comment.publisher
            ),
            Piece::EntriesStart { .. }
            | Piece::EntryEnd { .. }
            | Piece::EntriesEnd { .. }
            | Piece::BodyStart
            | Piece::ChildLink(_)
            | Piece::SectionEnd { .. }
            | Piece::CommentEnd { .. }
            | Piece::BodyEnd => String::new(),
        }
    }
}
