//! Content addressing for forms
//!
//! Every element of a form gets a node in the content-address tree. Leaves
//! are hashed over their canonical JSON. A form is hashed over the canonical
//! JSON of its content with each child form replaced by `{"digest": ...}`
//! (keeping the child's heading), so a digest covers everything beneath it
//! without serializing any subtree twice.
//!
//! Canonical JSON has object keys in sorted order and no whitespace. The
//! digest is SHA-256, in lowercase hex.

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::language::{AddressNode, Element, Form};

/// Compute the content-address tree of a form.
pub fn merkleize(form: &Form) -> AddressNode {
    let content: Vec<AddressNode> = form
        .content
        .iter()
        .map(|element| match element {
            Element::Child { form, .. } => merkleize(form),
            _ => AddressNode {
                digest: hash(&canonical(element)),
                content: Vec::new(),
            },
        })
        .collect();

    let skeleton: Vec<Value> = form
        .content
        .iter()
        .zip(&content)
        .map(|(element, node)| match element {
            Element::Child { heading, .. } => {
                let mut object = Map::new();
                object.insert("digest".to_string(), Value::String(node.digest.clone()));
                if let Some(heading) = heading {
                    object.insert("heading".to_string(), Value::String(heading.clone()));
                }
                Value::Object(object)
            }
            _ => canonical(element),
        })
        .collect();

    let mut object = Map::new();
    object.insert("content".to_string(), Value::Array(skeleton));
    if let Some(conspicuous) = &form.conspicuous {
        object.insert("conspicuous".to_string(), Value::String(conspicuous.clone()));
    }

    let digest = hash(&Value::Object(object));
    debug!(%digest, elements = content.len(), "Hashed form");

    AddressNode { digest, content }
}

/// The digest of a form alone.
pub fn digest(form: &Form) -> String {
    merkleize(form).digest
}

fn hash(value: &Value) -> String {
    // serde_json's Map is ordered by key, so Display is already canonical
    let bytes = value.to_string();
    hex::encode(Sha256::digest(bytes.as_bytes()))
}

fn canonical(element: &Element) -> Value {
    let mut object = Map::new();
    match element {
        Element::Text(text) => return Value::String(text.clone()),
        Element::Definition { definition } => {
            object.insert("definition".to_string(), Value::String(definition.clone()));
        }
        Element::Use { term } => {
            object.insert("use".to_string(), Value::String(term.clone()));
        }
        Element::Reference { reference } => {
            object.insert("reference".to_string(), Value::String(reference.clone()));
        }
        Element::Blank { blank } => {
            object.insert("blank".to_string(), Value::String(blank.clone()));
        }
        Element::Child { heading, form } => {
            object.insert("digest".to_string(), Value::String(digest(form)));
            if let Some(heading) = heading {
                object.insert("heading".to_string(), Value::String(heading.clone()));
            }
        }
        Element::Component {
            heading,
            repository,
            publisher,
            project,
            edition,
            upgrade,
            substitutions,
        } => {
            object.insert("repository".to_string(), Value::String(repository.clone()));
            object.insert("publisher".to_string(), Value::String(publisher.clone()));
            object.insert("project".to_string(), Value::String(project.clone()));
            object.insert("edition".to_string(), Value::String(edition.clone()));
            if let Some(heading) = heading {
                object.insert("heading".to_string(), Value::String(heading.clone()));
            }
            if let Some(upgrade) = upgrade {
                object.insert("upgrade".to_string(), Value::String(upgrade.clone()));
            }
            if let Some(substitutions) = substitutions {
                object.insert("substitutions".to_string(), substitutions.clone());
            }
        }
    }
    Value::Object(object)
}
