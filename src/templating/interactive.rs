//! Interactive template: a complete HTML page

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::composing::Composed;
use crate::language::AddressNode;
use crate::loading::Bundle;
use crate::rendering::{render, Html};

use super::{Template, TemplateError};

static PAGE: &str = r#"<!doctype html>
<html lang=en-US>
<head>
<meta charset=UTF-8>
<title>{title}</title>
</head>
<body>
<main class=formwork data-form="{form}"{{ if authored }} data-authored="{authored}"{{ endif }} data-tree="{tree}" data-mappings="{mappings}" data-annotations="{annotations}">
{body | unescaped}</main>
</body>
</html>
"#;

#[derive(Serialize)]
struct Context {
    title: String,
    form: String,
    authored: Option<String>,
    tree: String,
    mappings: String,
    annotations: String,
    body: String,
}

/// HTML for display in a browser. The resolved form, its content-address
/// tree, the blank values and the annotations travel with the page as JSON
/// in data attributes so scripts can edit blanks and toggle annotations
/// without asking a server.
#[derive(Debug, Clone, Copy, Default)]
pub struct Interactive {
    pub child_links: bool,
}

impl Template for Interactive {
    fn render(
        &self,
        bundle: &Bundle,
        address: &AddressNode,
        composed: &Composed,
    ) -> Result<String, TemplateError> {
        let html = Html {
            child_links: self.child_links,
        };

        let authored = match &bundle.authored {
            Some(form) => Some(serde_json::to_string(form)?),
            None => None,
        };

        let context = Context {
            title: bundle
                .settings
                .title
                .clone()
                .unwrap_or_else(|| "Form".to_string()),
            form: serde_json::to_string(&bundle.resolved)?,
            authored,
            tree: serde_json::to_string(address)?,
            mappings: serde_json::to_string(&bundle.mappings)?,
            annotations: serde_json::to_string(&bundle.annotations)?,
            body: render(&html, composed),
        };

        let mut tt = TinyTemplate::new();
        tt.add_template("page", PAGE)?;
        Ok(tt.render("page", &context)?)
    }
}
