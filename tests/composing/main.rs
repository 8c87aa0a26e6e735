mod overlays;
mod samples;
mod structure;

use formwork::language::Form;

/// Build a form from its JSON representation.
pub fn form(value: serde_json::Value) -> Form {
    serde_json::from_value(value).expect("Invalid form in test")
}
