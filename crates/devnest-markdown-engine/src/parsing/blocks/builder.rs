use crate::parsing::inline::{MarkedText, format_marked, format_raw};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::CodeFence,
    types::{Block, ListKind},
};

/// The one structure that may be accumulating lines.
#[derive(Debug, Default)]
enum OpenBlock {
    #[default]
    None,
    /// Raw lines, escaped and formatted together on close.
    Paragraph(Vec<String>),
    /// Formatted item bodies.
    List { kind: ListKind, items: Vec<String> },
    /// Formatted quote lines.
    Blockquote(Vec<String>),
    /// Raw lines, escaped when written.
    Code {
        language: Option<String>,
        lines: Vec<String>,
    },
}

/// Line-at-a-time block state machine.
///
/// Every transition closes the open structure before opening another, so
/// emitted blocks stay in document order.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    classifier: MarkdownLineClassifier,
    open: OpenBlock,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: &str) {
        if self.in_code() {
            if CodeFence::closes(line.trim()) {
                self.close();
            } else {
                self.extend_code(line);
            }
            return;
        }

        match self.classifier.classify(line) {
            LineClass::Blank => self.close(),
            LineClass::FenceOpen { language } => {
                self.close();
                self.open = OpenBlock::Code {
                    language: language.map(str::to_owned),
                    lines: vec![],
                };
            }
            LineClass::Rule => {
                self.close();
                self.out.push(Block::HorizontalRule);
            }
            LineClass::Heading { level, text } => {
                self.close();
                self.out.push(Block::Heading {
                    level,
                    html: format_raw(text),
                });
            }
            LineClass::Quote(text) => self.extend_quote(text),
            LineClass::ListItem { kind, text } => self.extend_list(kind, text),
            LineClass::Text => self.extend_paragraph(line),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        if self.in_code() {
            log::trace!("flushing unterminated code fence at end of input");
        }
        self.close();
        self.out
    }

    fn in_code(&self) -> bool {
        matches!(self.open, OpenBlock::Code { .. })
    }

    fn extend_code(&mut self, line: &str) {
        if let OpenBlock::Code { lines, .. } = &mut self.open {
            lines.push(line.to_owned());
        }
    }

    fn extend_quote(&mut self, text: &str) {
        if !matches!(self.open, OpenBlock::Blockquote(_)) {
            self.close();
            self.open = OpenBlock::Blockquote(vec![]);
        }
        if let OpenBlock::Blockquote(lines) = &mut self.open {
            lines.push(format_raw(text));
        }
    }

    fn extend_list(&mut self, kind: ListKind, text: &str) {
        let same_kind = matches!(&self.open, OpenBlock::List { kind: open, .. } if *open == kind);
        if !same_kind {
            self.close();
            self.open = OpenBlock::List {
                kind,
                items: vec![],
            };
        }
        if let OpenBlock::List { items, .. } = &mut self.open {
            items.push(format_raw(text));
        }
    }

    fn extend_paragraph(&mut self, line: &str) {
        if !matches!(self.open, OpenBlock::Paragraph(_)) {
            self.close();
            self.open = OpenBlock::Paragraph(vec![]);
        }
        if let OpenBlock::Paragraph(lines) = &mut self.open {
            lines.push(line.to_owned());
        }
    }

    /// Flushes whatever is open. Closing with nothing open is a no-op.
    fn close(&mut self) {
        let block = match std::mem::take(&mut self.open) {
            OpenBlock::None => return,
            OpenBlock::Paragraph(lines) => Block::Paragraph(format_marked(MarkedText::join_lines(
                lines.iter().map(String::as_str),
            ))),
            OpenBlock::List { kind, items } => Block::List { kind, items },
            OpenBlock::Blockquote(lines) => Block::Blockquote(lines),
            OpenBlock::Code { language, lines } => Block::CodeBlock { language, lines },
        };
        self.out.push(block);
    }
}
