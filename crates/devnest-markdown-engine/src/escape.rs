//! # Escaping
//!
//! Every piece of user-authored text passes through [`escape_html`] exactly
//! once before any inline formatting runs. Inline passes only ever see
//! escaped text, so nothing smuggled through a link, image or code span can
//! produce markup of its own.

/// Escapes `&`, `<`, `>`, `"` and `'`.
///
/// The result is safe both as element content and inside a quoted attribute
/// value. `&` is encoded in the same pass as the other characters, so a single
/// call never double-escapes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

/// Escapes an optional, untrusted body for display as literal text.
///
/// Missing and empty bodies both yield an empty string.
#[must_use]
pub fn escape_unsafe_html(text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => escape_html(text),
        _ => String::new(),
    }
}
