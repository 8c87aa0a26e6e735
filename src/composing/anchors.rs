//! Fragment identifiers linking headings, references, definitions and uses

use crate::language::Path;

/// The spelling under which uses of a term are matched to definitions.
pub fn normalize(term: &str) -> String {
    let re = regex!(r"\s+");
    re.replace_all(term.trim(), " ")
        .to_lowercase()
}

pub fn heading(heading: &str) -> String {
    format!("heading:{}", urlencoding::encode(heading))
}

/// Anchor for the definition of `term` in the form at `path`. Definitions at
/// the top level get the plain form; nested ones carry their position so that
/// a term defined in two places gets two anchors.
pub fn definition(term: &str, path: &Path) -> String {
    let term = normalize(term);
    let encoded = urlencoding::encode(&term);
    let slug = path.slug();
    if slug.is_empty() {
        format!("definition:{}", encoded)
    } else {
        format!("definition:{}:{}", encoded, slug)
    }
}
