use std::{fmt, path::Path as FilePath};

use crate::language::Path;

/// Problems reading or decoding an input bundle. These come from outside the
/// renderer and are passed straight back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i FilePath,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl<'i> std::error::Error for LoadingError<'i> {}

/// The inputs to a composition disagree with each other. Every variant is
/// fatal for the document being composed; nothing partial is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    /// The content-address node has a different number of entries than the
    /// form it supposedly describes.
    AddressMismatch {
        path: Path,
        elements: usize,
        addresses: usize,
    },
    /// The content-address node for a leaf element has content of its own.
    AddressLeaf { path: Path },
    /// Authored and resolved content group differently.
    AuthoredMismatch {
        path: Path,
        resolved: usize,
        authored: usize,
    },
    /// Group `index` differs in kind or length between authored and resolved.
    AuthoredGroup { path: Path, index: usize },
    /// A component reference survived loading.
    Unresolved { path: Path },
    /// A reply chain nests deeper than threading is willing to follow.
    ThreadTooDeep { digest: String, depth: usize },
    /// Composition ran past the wall-clock budget it was given.
    BudgetExceeded { path: Path, millis: u128 },
}

impl IntegrityError {
    pub fn path(&self) -> Option<&Path> {
        match self {
            IntegrityError::AddressMismatch { path, .. } => Some(path),
            IntegrityError::AddressLeaf { path } => Some(path),
            IntegrityError::AuthoredMismatch { path, .. } => Some(path),
            IntegrityError::AuthoredGroup { path, .. } => Some(path),
            IntegrityError::Unresolved { path } => Some(path),
            IntegrityError::ThreadTooDeep { .. } => None,
            IntegrityError::BudgetExceeded { path, .. } => Some(path),
        }
    }

    pub fn message(&self) -> String {
        match self {
            IntegrityError::AddressMismatch {
                elements,
                addresses,
                ..
            } => format!(
                "content-address tree has {} entries for {} elements",
                addresses, elements
            ),
            IntegrityError::AddressLeaf { .. } => {
                "content-address tree nests below a leaf element".to_string()
            }
            IntegrityError::AuthoredMismatch {
                resolved, authored, ..
            } => format!(
                "authored form has {} groups where resolved form has {}",
                authored, resolved
            ),
            IntegrityError::AuthoredGroup { index, .. } => {
                format!("authored and resolved forms differ at group {}", index)
            }
            IntegrityError::Unresolved { .. } => "unresolved component in loaded form".to_string(),
            IntegrityError::ThreadTooDeep { digest, depth } => {
                format!("reply chain {} deep on form {}", depth, digest)
            }
            IntegrityError::BudgetExceeded { millis, .. } => {
                format!("composition exceeded budget of {}ms", millis)
            }
        }
    }
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => write!(f, "integrity error at {}: {}", path, self.message()),
            None => write!(f, "integrity error: {}", self.message()),
        }
    }
}

impl std::error::Error for IntegrityError {}
