/// Code span inline type with owned delimiter and pattern.
///
/// Code spans are raw zones: their body is emitted as-is (already escaped)
/// and no later inline pass matches inside it.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
    /// Element wrapping the span body.
    pub const TAG: &'static str = "code";
    /// Single-backtick span with a non-empty body.
    pub const PATTERN: &'static str = r"`(?P<body>[^`]+)`";
}
