//! Partition the content of a form into runs of child forms ("series") and
//! runs of inline content ("paragraphs").

use crate::language::{Element, IntegrityError, Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Series,
    Paragraph,
}

impl Kind {
    pub fn of(element: &Element) -> Kind {
        if element.is_series() {
            Kind::Series
        } else {
            Kind::Paragraph
        }
    }
}

/// A maximal run of elements of the same kind. `offset` is the index of the
/// first member within the content of the enclosing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'i> {
    pub kind: Kind,
    pub offset: usize,
    pub elements: &'i [Element],
}

/// Single left-to-right scan, closing the current group whenever the kind
/// of the next element changes.
pub fn group(content: &[Element]) -> Vec<Group<'_>> {
    let mut groups = Vec::new();
    let mut start = 0;

    for index in 1..=content.len() {
        let boundary = index == content.len() || Kind::of(&content[index]) != Kind::of(&content[start]);
        if boundary {
            groups.push(Group {
                kind: Kind::of(&content[start]),
                offset: start,
                elements: &content[start..index],
            });
            start = index;
        }
    }

    groups
}

/// Check that the groups of an authored form line up with the groups of its
/// resolved counterpart: same count, and pairwise the same kind and length.
pub fn congruent(path: &Path, resolved: &[Group], authored: &[Group]) -> Result<(), IntegrityError> {
    if resolved.len() != authored.len() {
        return Err(IntegrityError::AuthoredMismatch {
            path: path.clone(),
            resolved: resolved.len(),
            authored: authored.len(),
        });
    }

    for (index, (r, a)) in resolved
        .iter()
        .zip(authored)
        .enumerate()
    {
        let same = r.kind == a.kind
            && match r.kind {
                // members of a series are paired one to one
                Kind::Series => r
                    .elements
                    .len()
                    == a.elements
                        .len(),
                Kind::Paragraph => true,
            };
        if !same {
            return Err(IntegrityError::AuthoredGroup {
                path: path.clone(),
                index,
            });
        }
    }

    Ok(())
}
