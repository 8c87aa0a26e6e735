//! Walk the resolved form, its content-address tree, and the authored form
//! when there is one, together. At each level: check the trees still agree,
//! pick out the overlays that belong here, group the content, and recurse
//! into child forms.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::composing::{anchors, contents, Block, Composed, Inline, Node, Provenance, Section};
use crate::grouping::{congruent, group, Group, Kind};
use crate::language::*;
use crate::threading::Forest;

/// Overlays for the entire document, unfiltered, plus limits on the work
/// composition may do.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options<'i> {
    pub annotations: &'i [Annotation],
    pub comments: &'i [Comment],
    pub mappings: &'i [BlankMapping],
    pub budget: Option<Duration>,
}

// The three trees at one position. The authored form is absent at the top
// when none was supplied, and beneath any component the author referenced
// rather than wrote out.
#[derive(Clone, Copy)]
struct Trio<'i> {
    resolved: &'i Form,
    address: &'i AddressNode,
    authored: Option<&'i Form>,
}

/// Compose a resolved form with the overlays in `options`.
///
/// `address` must be the content-address tree of `resolved`. If `authored`
/// is given it must group the same way as `resolved` at every level where
/// both exist. Any disagreement aborts with an [`IntegrityError`].
pub fn compose<'i>(
    resolved: &'i Form,
    address: &'i AddressNode,
    authored: Option<&'i Form>,
    resolutions: &'i [Resolution],
    options: &Options<'i>,
) -> Result<Composed<'i>, IntegrityError> {
    let mut composer = Composer::new(resolutions, options);

    let body = composer.node(
        Path::root(),
        Trio {
            resolved,
            address,
            authored,
        },
    )?;
    let contents = contents::collect(&body);

    let unmatched = options
        .annotations
        .len()
        .saturating_sub(composer.attached);
    if unmatched > 0 {
        debug!(unmatched, "Annotations matching no form left out");
    }

    info!(
        digest = %address.digest,
        elapsed = ?composer.started.elapsed(),
        "Composed form"
    );

    Ok(Composed { contents, body })
}

struct Composer<'i> {
    annotations: Vec<(Path, &'i Annotation)>,
    mappings: Vec<(Path, &'i BlankMapping)>,
    resolutions: Vec<(Path, &'i Resolution)>,
    comments: HashMap<&'i str, Vec<&'i Comment>>,
    scopes: Vec<HashMap<String, String>>,
    budget: Option<Duration>,
    started: Instant,
    attached: usize,
}

impl<'i> Composer<'i> {
    fn new(resolutions: &'i [Resolution], options: &Options<'i>) -> Composer<'i> {
        // The last two steps of an annotation's path reach into the node it
        // belongs to.
        let annotations = options
            .annotations
            .iter()
            .filter_map(|annotation| {
                annotation
                    .path
                    .canonical()
                    .strip(2)
                    .map(|path| (path, annotation))
            })
            .collect();

        let mappings = options
            .mappings
            .iter()
            .map(|mapping| {
                (
                    mapping
                        .blank
                        .canonical(),
                    mapping,
                )
            })
            .collect();

        let resolutions = resolutions
            .iter()
            .map(|resolution| {
                (
                    resolution
                        .path
                        .canonical(),
                    resolution,
                )
            })
            .collect();

        let mut comments: HashMap<&'i str, Vec<&'i Comment>> = HashMap::new();
        for comment in options.comments {
            comments
                .entry(comment.form.as_str())
                .or_default()
                .push(comment);
        }

        Composer {
            annotations,
            mappings,
            resolutions,
            comments,
            scopes: Vec::new(),
            budget: options.budget,
            started: Instant::now(),
            attached: 0,
        }
    }

    fn node(&mut self, path: Path, trio: Trio<'i>) -> Result<Node<'i>, IntegrityError> {
        self.check_budget(&path)?;

        let Trio {
            resolved,
            address,
            authored,
        } = trio;

        if address
            .content
            .len()
            != resolved
                .content
                .len()
        {
            return Err(IntegrityError::AddressMismatch {
                path,
                elements: resolved
                    .content
                    .len(),
                addresses: address
                    .content
                    .len(),
            });
        }

        let annotations: Vec<&'i Annotation> = self
            .annotations
            .iter()
            .filter(|(at, _)| *at == path)
            .map(|&(_, annotation)| annotation)
            .collect();
        self.attached += annotations.len();

        let comments = match self
            .comments
            .get(address.digest.as_str())
        {
            Some(list) => Forest::build(
                list.iter()
                    .copied(),
            )?,
            None => Forest::default(),
        };

        let groups = group(&resolved.content);
        let counterparts = match authored {
            Some(form) => {
                let authored = group(&form.content);
                congruent(&path, &groups, &authored)?;
                Some(authored)
            }
            None => None,
        };

        let scope = declarations(resolved, &path);
        self.scopes
            .push(scope);

        let mut claimed = HashSet::new();
        let mut blocks = Vec::with_capacity(groups.len());
        for (index, group) in groups
            .iter()
            .enumerate()
        {
            let counterpart = counterparts
                .as_ref()
                .and_then(|groups| groups.get(index))
                .copied();
            let block = match group.kind {
                Kind::Series => Block::Series(self.series(&path, group, counterpart, address)?),
                Kind::Paragraph => {
                    Block::Paragraph(self.paragraph(&path, group, address, &mut claimed)?)
                }
            };
            blocks.push(block);
        }

        self.scopes
            .pop();

        Ok(Node {
            path,
            digest: &address.digest,
            annotations,
            blocks,
            comments,
        })
    }

    fn series(
        &mut self,
        path: &Path,
        group: &Group<'i>,
        counterpart: Option<Group<'i>>,
        address: &'i AddressNode,
    ) -> Result<Vec<Section<'i>>, IntegrityError> {
        let mut sections = Vec::with_capacity(
            group
                .elements
                .len(),
        );

        for (k, element) in group
            .elements
            .iter()
            .enumerate()
        {
            let index = group.offset + k;
            let child = path.child(index);

            // Series hold child forms and components; a component here was
            // never loaded.
            let Element::Child { heading, form } = element else {
                return Err(IntegrityError::Unresolved { path: child });
            };

            let authored = counterpart
                .and_then(|group| {
                    group
                        .elements
                        .get(k)
                })
                .and_then(|element| match element {
                    Element::Child { form, .. } => Some(form),
                    _ => None,
                });

            let conspicuous = form.is_conspicuous() || authored.map_or(false, Form::is_conspicuous);
            let provenance = self.provenance(&child);

            let node = self.node(
                child,
                Trio {
                    resolved: form,
                    address: &address.content[index],
                    authored,
                },
            )?;

            sections.push(Section {
                heading: heading.as_deref(),
                conspicuous,
                provenance,
                node,
            });
        }

        Ok(sections)
    }

    fn paragraph(
        &self,
        path: &Path,
        group: &Group<'i>,
        address: &'i AddressNode,
        claimed: &mut HashSet<String>,
    ) -> Result<Vec<Inline<'i>>, IntegrityError> {
        let mut inlines = Vec::with_capacity(
            group
                .elements
                .len(),
        );

        for (k, element) in group
            .elements
            .iter()
            .enumerate()
        {
            let index = group.offset + k;
            if !address.content[index]
                .content
                .is_empty()
            {
                return Err(IntegrityError::AddressLeaf {
                    path: path.child(index),
                });
            }

            let inline = match element {
                Element::Text(text) => Inline::Text(text),
                // only the first definition of a spelling in this form is
                // the link target
                Element::Definition { definition } => Inline::Definition {
                    term: definition,
                    anchor: if claimed.insert(anchors::normalize(definition)) {
                        Some(anchors::definition(definition, path))
                    } else {
                        debug!(term = %definition, "Term defined again in the same form");
                        None
                    },
                },
                Element::Use { term } => Inline::Use {
                    term,
                    anchor: self.lookup(term),
                },
                Element::Reference { reference } => Inline::Reference { heading: reference },
                Element::Blank { .. } => {
                    let at = path.child(index);
                    let value = self.blank(&at);
                    Inline::Blank { path: at, value }
                }
                // never grouped into a paragraph
                Element::Child { .. } | Element::Component { .. } => continue,
            };
            inlines.push(inline);
        }

        Ok(inlines)
    }

    // Innermost scope first.
    fn lookup(&self, term: &str) -> Option<String> {
        let key = anchors::normalize(term);
        let found = self
            .scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(&key))
            .cloned();
        if found.is_none() {
            debug!(term, "Use of undefined term");
        }
        found
    }

    fn blank(&self, path: &Path) -> Option<&'i str> {
        let mut matching = self
            .mappings
            .iter()
            .filter(|(at, _)| at == path)
            .map(|&(_, mapping)| mapping.value.as_str());
        let value = matching.next();
        if matching
            .next()
            .is_some()
        {
            debug!(%path, "More than one mapping for blank, using the first");
        }
        value
    }

    fn provenance(&self, path: &Path) -> Option<Provenance<'i>> {
        self.resolutions
            .iter()
            .find(|(at, _)| at == path)
            .map(|&(_, resolution)| Provenance {
                publisher: &resolution.publisher,
                project: &resolution.project,
                edition: &resolution.edition,
                upgraded_from: resolution.upgraded_from(),
            })
    }

    fn check_budget(&self, path: &Path) -> Result<(), IntegrityError> {
        match self.budget {
            Some(budget) if self
                .started
                .elapsed()
                > budget =>
            {
                Err(IntegrityError::BudgetExceeded {
                    path: path.clone(),
                    millis: budget.as_millis(),
                })
            }
            _ => Ok(()),
        }
    }
}

// Terms defined directly in this form, wherever they appear in its content.
// The first definition of a spelling wins.
fn declarations(form: &Form, path: &Path) -> HashMap<String, String> {
    let mut scope = HashMap::new();
    for element in &form.content {
        if let Element::Definition { definition } = element {
            scope
                .entry(anchors::normalize(definition))
                .or_insert_with(|| anchors::definition(definition, path));
        }
    }
    scope
}
