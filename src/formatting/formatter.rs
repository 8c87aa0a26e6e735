//! Flatten a composed document into the piece stream

use crate::composing::{Block, Composed, Contents, Entry, Inline, Node, Section};
use crate::formatting::Piece;
use crate::threading::Thread;

/// Walk the composed tree in document order: the table of contents (when
/// there is one), then the body. Within each node the annotations come
/// first, then the blocks, then the comment threads.
pub fn flatten<'d>(composed: &'d Composed<'d>) -> Vec<Piece<'d>> {
    let mut output = Formatter::new();

    if let Some(contents) = &composed.contents {
        output.contents(contents);
    }

    output.append(Piece::BodyStart);
    output.node(&composed.body, 0);
    output.append(Piece::BodyEnd);

    output.pieces
}

struct Formatter<'d> {
    pieces: Vec<Piece<'d>>,
    ordinals: Vec<usize>,
    series: usize,
}

impl<'d> Formatter<'d> {
    fn new() -> Formatter<'d> {
        Formatter {
            pieces: Vec::new(),
            ordinals: Vec::new(),
            series: 0,
        }
    }

    fn append(&mut self, piece: Piece<'d>) {
        self.pieces
            .push(piece);
    }

    fn contents(&mut self, contents: &'d Contents<'d>) {
        self.append(Piece::ContentsStart);
        self.entries(&contents.entries, 0);
        self.append(Piece::ContentsEnd);
    }

    fn entries(&mut self, entries: &'d [Entry<'d>], depth: usize) {
        if entries.is_empty() {
            return;
        }
        self.append(Piece::EntriesStart { depth });
        for entry in entries {
            self.append(Piece::Entry {
                depth,
                heading: entry.heading,
            });
            self.entries(&entry.entries, depth + 1);
            self.append(Piece::EntryEnd { depth });
        }
        self.append(Piece::EntriesEnd { depth });
    }

    fn node(&mut self, node: &'d Node<'d>, depth: usize) {
        for annotation in &node.annotations {
            self.append(Piece::Annotation { depth, annotation });
        }

        for block in &node.blocks {
            match block {
                Block::Series(sections) => {
                    if depth == 0 {
                        self.series += 1;
                    }
                    // numbering restarts with every series
                    for (index, section) in sections
                        .iter()
                        .enumerate()
                    {
                        self.ordinals
                            .push(index + 1);
                        self.section(section, depth + 1);
                        self.ordinals
                            .pop();
                    }
                }
                Block::Paragraph(inlines) => {
                    self.append(Piece::ParagraphStart { depth });
                    for inline in inlines {
                        self.inline(inline);
                    }
                    self.append(Piece::ParagraphEnd { depth });
                }
            }
        }

        for thread in node
            .comments
            .roots()
        {
            self.thread(thread, depth);
        }
    }

    fn section(&mut self, section: &'d Section<'d>, depth: usize) {
        self.append(Piece::SectionStart {
            depth,
            ordinals: self
                .ordinals
                .clone(),
            series: self.series,
            heading: section.heading,
            conspicuous: section.conspicuous,
            component: section
                .provenance
                .is_some(),
        });
        if let Some(provenance) = &section.provenance {
            self.append(Piece::Provenance(provenance));
        }
        self.append(Piece::ChildLink(section.node.digest));
        self.node(&section.node, depth);
        self.append(Piece::SectionEnd { depth });
    }

    fn inline(&mut self, inline: &'d Inline<'d>) {
        let piece = match inline {
            Inline::Text(text) => Piece::Text(text),
            Inline::Definition { term, anchor } => Piece::Definition {
                term,
                anchor: anchor.as_deref(),
            },
            Inline::Use { term, anchor } => Piece::Use {
                term,
                anchor: anchor.as_deref(),
            },
            Inline::Reference { heading } => Piece::Reference(heading),
            Inline::Blank { path, value } => Piece::Blank {
                path,
                value: *value,
            },
        };
        self.append(piece);
    }

    fn thread(&mut self, thread: Thread<'d, 'd>, depth: usize) {
        self.append(Piece::CommentStart {
            depth,
            comment: thread.comment(),
        });
        for reply in thread.replies() {
            self.thread(reply, depth + 1);
        }
        self.append(Piece::CommentEnd { depth });
    }
}
