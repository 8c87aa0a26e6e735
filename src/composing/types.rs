//! The composed document: the resolved form with every overlay attached at
//! the level it belongs to. Everything borrows from the inputs.

use crate::language::{Annotation, Path};
use crate::threading::Forest;

#[derive(Debug)]
pub struct Composed<'i> {
    /// Present only when some section, at any depth, has a heading.
    pub contents: Option<Contents<'i>>,
    pub body: Node<'i>,
}

/// One level of the document: a form and what is attached to it.
#[derive(Debug)]
pub struct Node<'i> {
    pub path: Path,
    pub digest: &'i str,
    /// Rendered before the blocks.
    pub annotations: Vec<&'i Annotation>,
    /// One block per group of the form's content.
    pub blocks: Vec<Block<'i>>,
    /// Rendered after the blocks.
    pub comments: Forest<'i>,
}

#[derive(Debug)]
pub enum Block<'i> {
    Series(Vec<Section<'i>>),
    Paragraph(Vec<Inline<'i>>),
}

/// A child form in a series.
#[derive(Debug)]
pub struct Section<'i> {
    pub heading: Option<&'i str>,
    pub conspicuous: bool,
    pub provenance: Option<Provenance<'i>>,
    pub node: Node<'i>,
}

/// Where a section came from, when the loader filled it in from a published
/// component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance<'i> {
    pub publisher: &'i str,
    pub project: &'i str,
    pub edition: &'i str,
    pub upgraded_from: Option<&'i str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline<'i> {
    Text(&'i str),
    /// Only the first definition of a term in a form carries an anchor.
    Definition {
        term: &'i str,
        anchor: Option<String>,
    },
    /// `anchor` is that of the nearest enclosing definition, if any.
    Use {
        term: &'i str,
        anchor: Option<String>,
    },
    Reference {
        heading: &'i str,
    },
    Blank {
        path: Path,
        value: Option<&'i str>,
    },
}

/// Table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contents<'i> {
    pub entries: Vec<Entry<'i>>,
}

/// A section that has a heading or has one somewhere beneath it. A section
/// without a heading of its own is listed as "(No Heading)".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<'i> {
    pub heading: Option<&'i str>,
    pub entries: Vec<Entry<'i>>,
}
