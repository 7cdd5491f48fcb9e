/// Whether a list is bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// The list element name.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// A finished top-level block.
///
/// Text-bearing variants hold inline markup that has already been escaped and
/// formatted; code blocks hold their raw lines and are escaped when written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Contiguous text lines, joined with soft breaks.
    Paragraph(String),
    /// `# text` through `###### text`.
    Heading {
        /// 1 through 6.
        level: u8,
        html: String,
    },
    /// One formatted entry per `>` line.
    Blockquote(Vec<String>),
    /// One formatted entry per item.
    List { kind: ListKind, items: Vec<String> },
    /// Fenced code, lines kept verbatim.
    CodeBlock {
        language: Option<String>,
        lines: Vec<String>,
    },
    HorizontalRule,
}
