//! Entry points for turning a body into markup.

use crate::parsing::{blocks::Block, parse_document};

/// Characters kept by [`render_snippet`] unless told otherwise.
pub const DEFAULT_SNIPPET_CHARS: usize = 400;

/// Appended to a snippet that was cut short.
pub const ELLIPSIS: char = '…';

/// Renders a post or comment body.
///
/// Total over all strings: malformed syntax degrades to literal, escaped
/// text. Empty input yields empty output.
pub fn render(source: &str) -> String {
    if source.is_empty() {
        return String::new();
    }
    parse_document(source).to_html()
}

/// Runs the block pipeline and returns the typed blocks instead of markup.
pub fn render_blocks(source: &str) -> Vec<Block> {
    if source.is_empty() {
        return vec![];
    }
    parse_document(source).blocks
}

/// Trims `source` and cuts it to at most `max_chars` characters, appending
/// [`ELLIPSIS`] when anything was removed.
pub fn snippet(source: &str, max_chars: usize) -> String {
    let trimmed = source.trim();
    match trimmed.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut out = trimmed[..cut].to_owned();
            out.push(ELLIPSIS);
            out
        }
        None => trimmed.to_owned(),
    }
}

/// Renders the preview of a comment: [`snippet`] followed by [`render`].
pub fn render_snippet(source: &str, max_chars: usize) -> String {
    let snippet = snippet(source, max_chars);
    log::trace!("snippet kept {} of {} bytes", snippet.len(), source.len());
    render(&snippet)
}
