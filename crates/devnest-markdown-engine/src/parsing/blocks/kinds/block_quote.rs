/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not scattered in classifier
/// code. Only one level is recognised; `>> text` is a quote whose text starts
/// with `>`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the `>` prefix (and at most one following whitespace character)
    /// from a trimmed line.
    ///
    /// Returns `None` when the line is not a quote line.
    pub fn strip_prefix(trimmed: &str) -> Option<&str> {
        let rest = trimmed.strip_prefix(Self::PREFIX)?;
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => Some(chars.as_str()),
            _ => Some(rest),
        }
    }
}
