//! Templates for rendering composed forms into complete documents

mod interactive;
mod printable;
mod template;

pub use interactive::Interactive;
pub use printable::Printable;
pub use template::{Template, TemplateError};

use crate::composing::Composed;
use crate::language::AddressNode;
use crate::loading::Bundle;

/// Render a composed form using the specified template
pub fn fill(
    template: &impl Template,
    bundle: &Bundle,
    address: &AddressNode,
    composed: &Composed,
) -> Result<String, TemplateError> {
    template.render(bundle, address, composed)
}
