//! Types representing forms, their content-address trees, and the overlay
//! data computed about them by other tools

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::language::Path;

/// A form: an ordered sequence of content elements. Order is significant
/// and never changed by anything in this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub content: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conspicuous: Option<String>,
}

impl Form {
    pub fn is_conspicuous(&self) -> bool {
        self.conspicuous
            .is_some()
    }
}

/// The content of a form. Text and the inline markers are leaves; a child
/// form nests another level. Components are references to published forms
/// that have not been loaded yet, and only ever appear in authored trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Text(String),
    Definition {
        definition: String,
    },
    Use {
        #[serde(rename = "use")]
        term: String,
    },
    Reference {
        reference: String,
    },
    Blank {
        blank: String,
    },
    Child {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        form: Form,
    },
    Component {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        repository: String,
        publisher: String,
        project: String,
        edition: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        upgrade: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        substitutions: Option<serde_json::Value>,
    },
}

impl Element {
    /// Child forms and components form series; everything else is
    /// paragraph content.
    pub fn is_series(&self) -> bool {
        match self {
            Element::Child { .. } | Element::Component { .. } => true,
            Element::Text(_)
            | Element::Definition { .. }
            | Element::Use { .. }
            | Element::Reference { .. }
            | Element::Blank { .. } => false,
        }
    }

    pub fn heading(&self) -> Option<&str> {
        match self {
            Element::Child { heading, .. } | Element::Component { heading, .. } => heading.as_deref(),
            _ => None,
        }
    }
}

/// A node of the content-address tree. Congruent with the form it was
/// computed from: exactly one node per content element, leaves having no
/// content of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressNode {
    pub digest: String,
    #[serde(default)]
    pub content: Vec<AddressNode>,
}

/// Record left by the loader of a component it replaced with the content of
/// a published form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub path: Path,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    pub publisher: String,
    pub project: String,
    pub edition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specified: Option<String>,
    #[serde(default)]
    pub upgrade: bool,
}

impl Resolution {
    /// The edition the author asked for, when the loader substituted a
    /// different one.
    pub fn upgraded_from(&self) -> Option<&str> {
        match &self.specified {
            Some(specified) if self.upgrade && *specified != self.edition => Some(specified.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warning,
    Notice,
    Info,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Info => "info",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic from a lint or critique pass, addressed by the path of the
/// element it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub path: Path,
    pub level: Level,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A discussion comment. Comments are bound to the digest of the form they
/// discuss rather than to its position. `reply_to` lists the ancestors of a
/// reply, nearest first, ending with the root of the thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub uuid: String,
    pub publisher: String,
    #[serde(deserialize_with = "timestamp")]
    pub timestamp: i64,
    pub text: String,
    pub form: String,
    #[serde(default, rename = "replyTo")]
    pub reply_to: Vec<String>,
}

impl Comment {
    pub fn is_root(&self) -> bool {
        self.reply_to
            .is_empty()
    }
}

// Timestamps arrive as milliseconds, either as JSON numbers or as strings of
// digits.
fn timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(number) => Ok(number),
        Raw::Text(text) => text
            .trim()
            .parse()
            .map_err(de::Error::custom),
    }
}

/// A value filling the blank at the given path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlankMapping {
    #[serde(alias = "path")]
    pub blank: Path,
    pub value: String,
}
