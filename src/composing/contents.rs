//! Table of contents, collected from the headings of a composed document.

use crate::composing::{Block, Contents, Entry, Node};

pub(crate) fn collect<'i>(body: &Node<'i>) -> Option<Contents<'i>> {
    let entries = entries(body);
    if entries.is_empty() {
        None
    } else {
        Some(Contents { entries })
    }
}

fn entries<'i>(node: &Node<'i>) -> Vec<Entry<'i>> {
    let mut result = Vec::new();
    for block in &node.blocks {
        let Block::Series(sections) = block else {
            continue;
        };
        for section in sections {
            let beneath = entries(&section.node);
            if section
                .heading
                .is_some()
                || !beneath.is_empty()
            {
                result.push(Entry {
                    heading: section.heading,
                    entries: beneath,
                });
            }
        }
    }
    result
}
