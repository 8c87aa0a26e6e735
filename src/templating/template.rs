//! Template trait for wrapping rendered forms into complete documents

use std::fmt;

use crate::composing::Composed;
use crate::language::AddressNode;
use crate::loading::Bundle;

/// Trait for templates that turn a composed form into a complete document
/// in some output format.
pub trait Template {
    /// Render the composed form, together with the bundle it came from and
    /// the content-address tree it was composed against.
    fn render(
        &self,
        bundle: &Bundle,
        address: &AddressNode,
        composed: &Composed,
    ) -> Result<String, TemplateError>;
}

#[derive(Debug)]
pub enum TemplateError {
    /// The page template itself failed to compile or render.
    Template(tinytemplate::error::Error),
    /// Data embedded in the page failed to serialize.
    Serialize(serde_json::Error),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Template(error) => write!(f, "template failed: {}", error),
            TemplateError::Serialize(error) => write!(f, "serializing page data failed: {}", error),
        }
    }
}

impl std::error::Error for TemplateError {}

impl From<tinytemplate::error::Error> for TemplateError {
    fn from(error: tinytemplate::error::Error) -> Self {
        TemplateError::Template(error)
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(error: serde_json::Error) -> Self {
        TemplateError::Serialize(error)
    }
}
