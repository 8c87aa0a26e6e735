//! Locations within a form, as sequences of structural steps

use serde::{Deserialize, Serialize};
use std::fmt;

/// One step of a path: either a named slot ("content", "form", "heading")
/// or a position within the content of a form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Index(usize),
    Key(String),
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

// Integer literals in path! default to i32. A negative index is a
// programmer error and saturates to zero.
impl From<i32> for Step {
    fn from(index: i32) -> Self {
        Step::Index(usize::try_from(index).unwrap_or_default())
    }
}

impl From<&str> for Step {
    fn from(key: &str) -> Self {
        Step::Key(key.to_string())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Index(index) => write!(f, "{}", index),
            Step::Key(key) => write!(f, "\"{}\"", key),
        }
    }
}

/// A path from the root of a form down to a nested form or one of its
/// elements. Paths have value semantics; operations that lengthen or shorten
/// a path return a new one.
///
/// Equality is step-for-step identity of the two sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Step>);

/// Build a [`Path`] from a list of keys and indices, as in
/// `path!["content", 0, "form"]`.
#[macro_export]
macro_rules! path {
    () => {
        $crate::language::Path::root()
    };
    ($($step:expr),+ $(,)?) => {
        $crate::language::Path::from(vec![$($crate::language::Step::from($step)),+])
    };
}

impl Path {
    pub fn root() -> Path {
        Path(Vec::new())
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0
            .len()
    }

    pub fn is_root(&self) -> bool {
        self.0
            .is_empty()
    }

    /// Whether every step of this path matches the leading steps of the
    /// other. A path is a prefix of itself, and the root is a prefix of
    /// everything.
    pub fn is_prefix_of(&self, other: &Path) -> bool {
        other
            .0
            .starts_with(&self.0)
    }

    pub fn extend<I, S>(&self, steps: I) -> Path
    where
        I: IntoIterator<Item = S>,
        S: Into<Step>,
    {
        let mut result = self
            .0
            .clone();
        result.extend(
            steps
                .into_iter()
                .map(Into::into),
        );
        Path(result)
    }

    /// The path of the element at `index` within the content of the form
    /// at this path.
    pub fn child(&self, index: usize) -> Path {
        self.extend([Step::from("content"), Step::Index(index)])
    }

    /// This path with its final `count` steps removed, or None if it is not
    /// that long.
    pub fn strip(&self, count: usize) -> Option<Path> {
        let length = self.len();
        if length < count {
            return None;
        }
        Some(Path(self.0[..length - count].to_vec()))
    }

    /// The same location with every "form" step removed. A nested form sits
    /// at the same position as the element holding it, so producers that
    /// address the form slot and producers that address the element end up
    /// with the same canonical path.
    pub fn canonical(&self) -> Path {
        Path(
            self.0
                .iter()
                .filter(|step| !matches!(step, Step::Key(key) if key == "form"))
                .cloned()
                .collect(),
        )
    }

    /// The content indices along this path, joined with dots. Used to build
    /// anchors that are unique per position.
    pub fn slug(&self) -> String {
        self.0
            .iter()
            .filter_map(|step| match step {
                Step::Index(index) => Some(index.to_string()),
                Step::Key(_) => None,
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl From<Vec<Step>> for Path {
    fn from(steps: Vec<Step>) -> Self {
        Path(steps)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, step) in self
            .0
            .iter()
            .enumerate()
        {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", step)?;
        }
        write!(f, "]")
    }
}
