//! # Inline Formatting
//!
//! Regex-driven inline formatting over already-escaped text.
//!
//! ## Architecture
//!
//! Inline formatting is an ordered list of pure passes (`passes`). Each pass
//! takes a [`MarkedText`] and returns a new one; none mutates its input.
//!
//! 1. code spans
//! 2. bold (`**`, then `__`)
//! 3. italic (`*`, then `_`)
//! 4. strikethrough
//! 5. images
//! 6. links
//!
//! ## Opaque Zones
//!
//! Everything a pass emits is recorded as an opaque zone, as is the body of a
//! code span. A pass never matches against zones directly: it matches against
//! a view of one nesting level in which each element, each other zone and
//! (until the link passes run) each link destination is a single `U+FFFC`
//! placeholder. A match can therefore wrap a zone whole but never part of
//! one, generated tags are not re-scanned, and code bodies are never
//! formatted. Element content is then matched as a level of its own.
//!
//! Each level is scanned once per pass, so formatting is linear in the input
//! however many candidate matches it holds.
//!
//! ## Safety
//!
//! [`MarkedText`] is only built from escaped text, and links and images only
//! accept `http:`/`https:` destinations.

pub mod kinds;
pub mod marked;
pub mod passes;

pub use marked::{MarkedText, Zone, ZoneKind};
pub use passes::{InlinePass, PassKind, passes};

/// Formats already-escaped text.
///
/// Callers must escape first (see [`crate::escape::escape_html`]); this is
/// what keeps markup out of link and image destinations.
pub fn format_inline(escaped: &str) -> String {
    format_marked(MarkedText::from_escaped(escaped))
}

/// Runs every inline pass over `text` and returns the final markup.
pub fn format_marked(text: MarkedText) -> String {
    passes()
        .iter()
        .fold(text, |acc, pass| pass.apply(&acc))
        .into_string()
}

/// Escapes `raw` and formats it.
pub fn format_raw(raw: &str) -> String {
    format_marked(MarkedText::escape(raw))
}
