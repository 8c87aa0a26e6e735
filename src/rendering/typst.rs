//! Printable output as Typst markup

use std::borrow::Cow;

use crate::formatting::*;
use crate::language::Level;
use crate::rendering::numbering;
use crate::settings::{Emphasis, Scheme, Settings, Styles};

/// Markup for the paginated document. Headings are run in at the start of
/// their section, after the section's number.
#[derive(Debug, Clone, Copy)]
pub struct Typst {
    pub numbering: Scheme,
    pub styles: Styles,
    pub indent_margins: bool,
    pub mark_filled: bool,
}

impl Typst {
    pub fn new(settings: &Settings) -> Typst {
        Typst {
            numbering: settings.numbering,
            styles: settings.styles,
            indent_margins: settings.indent_margins,
            mark_filled: settings.mark_filled,
        }
    }
}

impl Default for Typst {
    fn default() -> Self {
        Typst::new(&Settings::default())
    }
}

impl Render for Typst {
    fn style(&self, piece: &Piece) -> String {
        match piece {
            Piece::ContentsStart => {
                "#heading(outlined: false, numbering: none)[Table of Contents]\n".to_string()
            }
            Piece::Entry { depth, heading } => match heading {
                Some(heading) => format!("{}- {}\n", indent(*depth), escape_typst(heading)),
                None => format!("{}- (No Heading)\n", indent(*depth)),
            },
            Piece::ContentsEnd => "\n".to_string(),
            Piece::SectionStart {
                depth,
                ordinals,
                series,
                heading,
                conspicuous,
                ..
            } => {
                let inset = if self.indent_margins && *depth > 1 {
                    "1.5em"
                } else {
                    "0em"
                };
                let mut result = format!("#block(inset: (left: {}))[\n", inset);
                if *conspicuous {
                    result.push_str("#set text(weight: \"bold\")\n");
                }
                result.push_str(&format!(
                    "#strong[{}] ",
                    escape_typst(&numbering::label(self.numbering, *series, ordinals))
                ));
                if let Some(heading) = heading {
                    result.push_str(&emphasize(
                        &self.styles.heading,
                        escape_typst(heading).into_owned(),
                    ));
                    result.push_str(". ");
                }
                result
            }
            Piece::Provenance(provenance) => match provenance.upgraded_from {
                Some(specified) => format!(
                    "#footnote[{} {} {}, upgraded from {}.] ",
                    escape_typst(provenance.publisher),
                    escape_typst(provenance.project),
                    escape_typst(provenance.edition),
                    escape_typst(specified)
                ),
                None => format!(
                    "#footnote[{} {} {}.] ",
                    escape_typst(provenance.publisher),
                    escape_typst(provenance.project),
                    escape_typst(provenance.edition)
                ),
            },
            Piece::SectionEnd { .. } => "\n]\n".to_string(),
            Piece::Annotation { annotation, .. } => {
                let colour = match annotation.level {
                    Level::Error => "red",
                    Level::Warning => "orange",
                    Level::Notice | Level::Info => "blue",
                };
                format!(
                    "#block(stroke: (left: 2pt + {}), inset: 4pt)[#text(size: 0.9em)[*{}:* {}]]\n",
                    colour,
                    annotation.level,
                    escape_typst(&annotation.message)
                )
            }
            Piece::ParagraphEnd { .. } => "\n\n".to_string(),
            Piece::Text(text) => escape_typst(text).into_owned(),
            Piece::Definition { term, .. } => format!("\"#strong[{}]\"", escape_typst(term)),
            Piece::Use { term, .. } => escape_typst(term).into_owned(),
            Piece::Reference(heading) => emphasize(
                &self.styles.reference,
                emphasize(
                    &self.styles.reference_heading,
                    escape_typst(heading).into_owned(),
                ),
            ),
            Piece::Blank { value, .. } => match value {
                Some(value) if self.mark_filled => format!("#underline[{}]", escape_typst(value)),
                Some(value) => escape_typst(value).into_owned(),
                None => "\\[•\\]".to_string(),
            },
            Piece::CommentStart { comment, .. } => format!(
                "#block(inset: (left: 1em))[#text(size: 0.8em)[{} ({})]\n",
                escape_typst(&comment.text),
                escape_typst(&comment.publisher)
            ),
            Piece::CommentEnd { .. } => "]\n".to_string(),
            Piece::EntriesStart { .. }
            | Piece::EntryEnd { .. }
            | Piece::EntriesEnd { .. }
            | Piece::BodyStart
            | Piece::BodyEnd
            | Piece::ChildLink(_)
            | Piece::ParagraphStart { .. } => String::new(),
        }
    }
}

fn emphasize(emphasis: &Emphasis, content: String) -> String {
    let mut result = content;
    if emphasis.bold {
        result = format!("#strong[{}]", result);
    }
    if emphasis.italic {
        result = format!("#emph[{}]", result);
    }
    if emphasis.underline {
        result = format!("#underline[{}]", result);
    }
    result
}

/// Escape characters that have meaning in Typst markup. Characters that only
/// matter at the start of a line are escaped only there.
pub(crate) fn escape_typst(content: &str) -> Cow<'_, str> {
    const SPECIAL: [char; 13] = ['\\', '#', '*', '_', '[', ']', '$', '<', '>', '@', '`', '~', '/'];
    const LEADING: [char; 3] = ['=', '-', '+'];

    let leading = content.starts_with(LEADING);
    if !leading && !content.contains(SPECIAL) {
        return Cow::Borrowed(content);
    }

    let mut result = String::with_capacity(content.len() + 8);
    for (i, c) in content
        .chars()
        .enumerate()
    {
        if SPECIAL.contains(&c) || (i == 0 && LEADING.contains(&c)) {
            result.push('\\');
        }
        result.push(c);
    }
    Cow::Owned(result)
}
