//! Interactive output as HTML

use chrono::DateTime;
use std::borrow::Cow;

use crate::composing::anchors;
use crate::formatting::*;

/// Sectioning markup for display in a browser. The page around it (see
/// templating) carries the data client-side scripts need to edit blanks and
/// toggle annotations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html {
    /// Link each section to the standalone page for its digest.
    pub child_links: bool,
}

impl Render for Html {
    fn style(&self, piece: &Piece) -> String {
        match piece {
            Piece::ContentsStart => "<nav class=contents>\n<h2>Table of Contents</h2>\n".to_string(),
            Piece::EntriesStart { .. } => "<ol>\n".to_string(),
            Piece::Entry { heading, .. } => match heading {
                Some(heading) => format!(
                    "<li><a href=\"#{}\">{}</a>",
                    escape_html(&anchors::heading(heading)),
                    escape_html(heading)
                ),
                None => "<li><span class=untitled>(No Heading)</span>".to_string(),
            },
            Piece::EntryEnd { .. } => "</li>\n".to_string(),
            Piece::EntriesEnd { .. } => "</ol>\n".to_string(),
            Piece::ContentsEnd => "</nav>\n".to_string(),
            Piece::BodyStart => "<article class=form>\n".to_string(),
            Piece::BodyEnd => "</article>\n".to_string(),
            Piece::SectionStart {
                heading,
                conspicuous,
                component,
                ..
            } => {
                let mut classes = Vec::new();
                if *conspicuous {
                    classes.push("conspicuous");
                }
                if *component {
                    classes.push("component");
                }

                let mut result = if classes.is_empty() {
                    "<section>\n".to_string()
                } else {
                    format!("<section class=\"{}\">\n", classes.join(" "))
                };
                if let Some(heading) = heading {
                    result.push_str(&format!(
                        "<h1 class=heading id=\"{}\">{}</h1>\n",
                        escape_html(&anchors::heading(heading)),
                        escape_html(heading)
                    ));
                }
                result
            }
            Piece::Provenance(provenance) => {
                let publisher = urlencoding::encode(provenance.publisher);
                let project = format!("{}/{}", publisher, urlencoding::encode(provenance.project));
                let mut result = format!(
                    "<p class=provenance>{} {} {}",
                    link(&format!("/{}", publisher), provenance.publisher),
                    link(&format!("/{}", project), provenance.project),
                    link(
                        &format!("/{}/{}", project, urlencoding::encode(provenance.edition)),
                        provenance.edition
                    )
                );
                if let Some(specified) = provenance.upgraded_from {
                    result.push_str(&format!(
                        " <span class=upgrade>(upgraded from {})</span>",
                        link(
                            &format!("/{}/{}", project, urlencoding::encode(specified)),
                            specified
                        )
                    ));
                }
                result.push_str("</p>\n");
                result
            }
            Piece::ChildLink(digest) => {
                if self.child_links {
                    format!("<a class=child-link href=\"/forms/{0}\">{0}</a>\n", digest)
                } else {
                    String::new()
                }
            }
            Piece::SectionEnd { .. } => "</section>\n".to_string(),
            Piece::Annotation { annotation, .. } => {
                let mut result = format!(
                    "<aside class=\"annotation {}\"><p>{}</p>",
                    annotation.level,
                    escape_html(&annotation.message)
                );
                if let Some(url) = &annotation.url {
                    result.push_str(&format!(
                        "<a href=\"{}\">More information</a>",
                        escape_html(url)
                    ));
                }
                result.push_str("</aside>\n");
                result
            }
            Piece::ParagraphStart { .. } => "<p>".to_string(),
            Piece::ParagraphEnd { .. } => "</p>\n".to_string(),
            Piece::Text(text) => escape_html(text).into_owned(),
            Piece::Definition { term, anchor } => match anchor {
                Some(anchor) => format!(
                    "<dfn id=\"{}\">{}</dfn>",
                    escape_html(anchor),
                    escape_html(term)
                ),
                None => format!("<dfn>{}</dfn>", escape_html(term)),
            },
            Piece::Use { term, anchor } => match anchor {
                Some(anchor) => format!(
                    "<a class=use href=\"#{}\">{}</a>",
                    escape_html(anchor),
                    escape_html(term)
                ),
                None => format!("<span class=use>{}</span>", escape_html(term)),
            },
            Piece::Reference(heading) => format!(
                "<a class=reference href=\"#{}\">{}</a>",
                escape_html(&anchors::heading(heading)),
                escape_html(heading)
            ),
            Piece::Blank { path, value } => {
                let path = serde_json::to_string(path).unwrap_or_default();
                format!(
                    "<input type=text class=blank data-path=\"{}\" value=\"{}\" disabled>",
                    escape_html(&path),
                    escape_html(value.unwrap_or(""))
                )
            }
            Piece::CommentStart { comment, .. } => format!(
                "<aside class=comment data-uuid=\"{}\">\n<p class=byline>{} <time>{}</time></p>\n<p>{}</p>\n",
                escape_html(&comment.uuid),
                escape_html(&comment.publisher),
                date(comment.timestamp),
                escape_html(&comment.text)
            ),
            Piece::CommentEnd { .. } => "</aside>\n".to_string(),
        }
    }
}

fn date(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(moment) => moment
            .format("%a %b %d %Y")
            .to_string(),
        None => String::new(),
    }
}

fn link(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", escape_html(href), escape_html(text))
}

pub(crate) fn escape_html(content: &str) -> Cow<'_, str> {
    if !content.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(content);
    }

    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
