//! Presentation settings, read from the `settings` object of a bundle and
//! overridden from the command line.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub title: Option<String>,
    pub edition: Option<String>,
    pub numbering: Scheme,
    pub styles: Styles,
    pub indent_margins: bool,
    pub mark_filled: bool,
    pub center_title: bool,
    pub child_links: bool,
    pub budget_millis: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title: None,
            edition: None,
            numbering: Scheme::Outline,
            styles: Styles::default(),
            indent_margins: true,
            mark_filled: true,
            center_title: false,
            child_links: false,
            budget_millis: None,
        }
    }
}

impl Settings {
    pub fn budget(&self) -> Option<Duration> {
        self.budget_millis
            .map(Duration::from_millis)
    }
}

/// How sections are numbered in printed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// 1., (a), (i), (A), (I), (1), then around again
    #[default]
    Outline,
    /// 1, 1.1, 1.1.1
    Decimal,
    /// Resolutions, then Schedule 1, 2, ..., then Exhibit A, B, ...
    Rse,
    /// Agreement sections in outline style, then schedules and exhibits
    Ase,
}

impl FromStr for Scheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outline" => Ok(Scheme::Outline),
            "decimal" => Ok(Scheme::Decimal),
            "rse" => Ok(Scheme::Rse),
            "ase" => Ok(Scheme::Ase),
            _ => Err(format!("unknown numbering scheme \"{}\"", s)),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Outline => f.write_str("outline"),
            Scheme::Decimal => f.write_str("decimal"),
            Scheme::Rse => f.write_str("rse"),
            Scheme::Ase => f.write_str("ase"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Emphasis {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Emphasis {
    pub fn italic() -> Emphasis {
        Emphasis {
            italic: true,
            ..Emphasis::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Styles {
    pub alignment: Alignment,
    pub heading: Emphasis,
    pub reference: Emphasis,
    pub reference_heading: Emphasis,
}

impl Default for Styles {
    fn default() -> Self {
        Styles {
            alignment: Alignment::Left,
            heading: Emphasis::italic(),
            reference: Emphasis::italic(),
            reference_heading: Emphasis::italic(),
        }
    }
}
