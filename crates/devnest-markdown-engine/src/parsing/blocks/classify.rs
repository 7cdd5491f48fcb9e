use super::{
    kinds::{BlockQuote, CodeFence, Heading, ListItem, ThematicBreak},
    types::ListKind,
};

/// Classification of a single line outside a code block.
///
/// This is phase 1 of block parsing: each line is classified from its own
/// text, without reference to surrounding context. Text slices borrow from
/// the trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty after trimming.
    Blank,
    /// ```` ``` ```` with an optional language token.
    FenceOpen { language: Option<&'a str> },
    /// `---`, `***`, `___` and longer runs.
    Rule,
    Heading { level: u8, text: &'a str },
    /// Text after the `>` prefix.
    Quote(&'a str),
    ListItem { kind: ListKind, text: &'a str },
    /// Anything else: paragraph text.
    Text,
}

/// Classifies individual lines for the block parsing phase.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Checks run in priority order: fence, blank, rule, heading, quote,
    /// list item, then paragraph text.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();

        if let Some(open) = CodeFence::open(trimmed) {
            return LineClass::FenceOpen {
                language: open.language,
            };
        }
        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if ThematicBreak::matches(trimmed) {
            return LineClass::Rule;
        }
        if let Some((level, text)) = Heading::parse(trimmed) {
            return LineClass::Heading { level, text };
        }
        if let Some(text) = BlockQuote::strip_prefix(trimmed) {
            return LineClass::Quote(text);
        }
        if let Some((kind, text)) = ListItem::parse(trimmed) {
            return LineClass::ListItem { kind, text };
        }
        LineClass::Text
    }
}
