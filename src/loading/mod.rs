//! Reading input bundles: a resolved form plus everything computed about it

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

use crate::composing::{compose, Composed, Options};
use crate::hashing;
use crate::language::*;
use crate::settings::Settings;

/// Everything needed to render one form. Only `resolved` is required; the
/// content-address tree is computed when a bundle doesn't carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authored: Option<Form>,
    pub resolved: Form,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree: Option<AddressNode>,
    #[serde(default)]
    pub resolutions: Vec<Resolution>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub mappings: Vec<BlankMapping>,
    #[serde(default)]
    pub settings: Settings,
}

impl Bundle {
    /// The content-address tree of the resolved form, as supplied or else
    /// computed here.
    pub fn address(&self) -> Cow<'_, AddressNode> {
        match &self.tree {
            Some(tree) => Cow::Borrowed(tree),
            None => {
                debug!("No content-address tree supplied; computing one");
                Cow::Owned(hashing::merkleize(&self.resolved))
            }
        }
    }

    pub fn options(&self) -> Options<'_> {
        Options {
            annotations: &self.annotations,
            comments: &self.comments,
            mappings: &self.mappings,
            budget: self
                .settings
                .budget(),
        }
    }

    /// Compose this bundle against the given content-address tree, normally
    /// the one returned by [`Bundle::address`].
    pub fn compose<'i>(&'i self, address: &'i AddressNode) -> Result<Composed<'i>, IntegrityError> {
        compose(
            &self.resolved,
            address,
            self.authored
                .as_ref(),
            &self.resolutions,
            &self.options(),
        )
    }
}

/// Read a file and return an owned String. We pass that ownership back to the
/// main function so that the Bundle created by parse() below can be borrowed
/// from for the rest of the run.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Decode the JSON text of a bundle.
pub fn parse<'i>(filename: &'i Path, content: &str) -> Result<Bundle, LoadingError<'i>> {
    match serde_json::from_str::<Bundle>(content) {
        Ok(bundle) => {
            debug!(
                annotations = bundle
                    .annotations
                    .len(),
                comments = bundle
                    .comments
                    .len(),
                mappings = bundle
                    .mappings
                    .len(),
                resolutions = bundle
                    .resolutions
                    .len(),
                authored = bundle
                    .authored
                    .is_some(),
                "Loaded bundle"
            );
            Ok(bundle)
        }
        Err(error) => {
            debug!(?error);
            Err(LoadingError {
                problem: "Malformed bundle".to_string(),
                details: error.to_string(),
                filename,
            })
        }
    }
}
