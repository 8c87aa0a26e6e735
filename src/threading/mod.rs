//! Reconstruct discussion threads from a flat list of comments
//!
//! Comments live in an arena ordered by timestamp; the forest is a list of
//! root indices plus, for every comment, the indices of its direct replies.
//! A reply is attached beneath a comment when its reply chain begins with
//! that comment and then that comment's own ancestors. A reply whose chain
//! names any comment missing from the collection is left out.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::language::{Comment, IntegrityError};

/// Deepest reply nesting that will be followed.
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Default)]
pub struct Forest<'i> {
    arena: Vec<&'i Comment>,
    replies: Vec<Vec<usize>>,
    roots: Vec<usize>,
}

/// A comment within a forest, with access to its replies.
#[derive(Debug, Clone, Copy)]
pub struct Thread<'f, 'i> {
    forest: &'f Forest<'i>,
    index: usize,
}

impl<'f, 'i> Thread<'f, 'i> {
    pub fn comment(&self) -> &'i Comment {
        self.forest
            .arena[self.index]
    }

    pub fn replies(&self) -> impl Iterator<Item = Thread<'f, 'i>> + 'f {
        let forest = self.forest;
        forest.replies[self.index]
            .iter()
            .map(move |&index| Thread { forest, index })
    }
}

impl<'i> Forest<'i> {
    /// Thread a collection of comments that all discuss the same form.
    pub fn build<I>(comments: I) -> Result<Forest<'i>, IntegrityError>
    where
        I: IntoIterator<Item = &'i Comment>,
    {
        let mut arena: Vec<&'i Comment> = comments
            .into_iter()
            .collect();
        // stable, so comments sharing a timestamp keep their input order
        arena.sort_by_key(|comment| comment.timestamp);

        let known: HashSet<&'i str> = arena
            .iter()
            .map(|comment| comment.uuid.as_str())
            .collect();

        let mut children: HashMap<&'i str, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();
        for (index, &comment) in arena
            .iter()
            .enumerate()
        {
            let dangling = comment
                .reply_to
                .iter()
                .any(|uuid| !known.contains(uuid.as_str()));
            if dangling {
                continue;
            }
            match comment
                .reply_to
                .first()
            {
                None => roots.push(index),
                Some(parent) => children
                    .entry(parent.as_str())
                    .or_default()
                    .push(index),
            }
        }

        let mut forest = Forest {
            replies: vec![Vec::new(); arena.len()],
            arena,
            roots: Vec::new(),
        };
        let mut attached = vec![false; forest.arena.len()];
        let mut chain: Vec<&'i str> = Vec::new();

        for root in roots {
            if attached[root] {
                continue;
            }
            attached[root] = true;
            forest
                .roots
                .push(root);
            forest.attach(root, &children, &mut chain, &mut attached)?;
        }

        let dropped = attached
            .iter()
            .filter(|&&a| !a)
            .count();
        if dropped > 0 {
            debug!(dropped, "Comments with dangling replies left out of threads");
        }

        Ok(forest)
    }

    // `chain` holds the ancestors of `index`, root first.
    fn attach(
        &mut self,
        index: usize,
        children: &HashMap<&'i str, Vec<usize>>,
        chain: &mut Vec<&'i str>,
        attached: &mut [bool],
    ) -> Result<(), IntegrityError> {
        let comment = self.arena[index];
        chain.push(comment.uuid.as_str());

        if chain.len() > MAX_DEPTH {
            return Err(IntegrityError::ThreadTooDeep {
                digest: comment
                    .form
                    .clone(),
                depth: chain.len(),
            });
        }

        if let Some(candidates) = children.get(comment.uuid.as_str()) {
            for &candidate in candidates {
                if attached[candidate] {
                    continue;
                }
                // reply_to is nearest first, chain is root first
                let reply_to = &self.arena[candidate].reply_to;
                let matches = reply_to.len() >= chain.len()
                    && reply_to
                        .iter()
                        .take(chain.len())
                        .map(String::as_str)
                        .eq(chain
                            .iter()
                            .rev()
                            .copied());
                if !matches {
                    continue;
                }
                attached[candidate] = true;
                self.replies[index].push(candidate);
                self.attach(candidate, children, chain, attached)?;
            }
        }

        chain.pop();
        Ok(())
    }

    pub fn roots(&self) -> impl Iterator<Item = Thread<'_, 'i>> + '_ {
        self.roots
            .iter()
            .map(move |&index| Thread {
                forest: self,
                index,
            })
    }

    pub fn is_empty(&self) -> bool {
        self.roots
            .is_empty()
    }

    /// Number of comments that made it into a thread.
    pub fn len(&self) -> usize {
        self.roots
            .len()
            + self
                .replies
                .iter()
                .map(Vec::len)
                .sum::<usize>()
    }
}
