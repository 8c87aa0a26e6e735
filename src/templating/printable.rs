//! Printable template: a complete Typst document

use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::composing::Composed;
use crate::language::AddressNode;
use crate::loading::Bundle;
use crate::rendering::{escape_typst, render, Typst};
use crate::settings::Alignment;

use super::{Template, TemplateError};

static PREAMBLE: &str = r#"#set page(paper: "us-letter", margin: 1in, numbering: "1")
#set text(size: 11pt)
#set par(justify: {justify})
{{ if title }}#align({align})[#text(size: 14pt, weight: "bold")[{title}]]
{{ endif }}{{ if edition }}#align({align})[{edition}]
{{ endif }}
{body}"#;

#[derive(Serialize)]
struct Context {
    justify: bool,
    align: &'static str,
    title: Option<String>,
    edition: Option<String>,
    body: String,
}

/// Typst markup ready for `typst compile`, styled per the bundle's settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Printable;

impl Template for Printable {
    fn render(
        &self,
        bundle: &Bundle,
        _address: &AddressNode,
        composed: &Composed,
    ) -> Result<String, TemplateError> {
        let settings = &bundle.settings;
        let typst = Typst::new(settings);

        let context = Context {
            justify: settings
                .styles
                .alignment
                == Alignment::Justify,
            align: if settings.center_title { "center" } else { "left" },
            title: settings
                .title
                .as_deref()
                .map(|title| escape_typst(title).into_owned()),
            edition: settings
                .edition
                .as_deref()
                .map(|edition| escape_typst(edition).into_owned()),
            body: render(&typst, composed),
        };

        // Typst has its own escaping, done by the renderer
        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&format_unescaped);
        tt.add_template("document", PREAMBLE)?;
        Ok(tt.render("document", &context)?)
    }
}
