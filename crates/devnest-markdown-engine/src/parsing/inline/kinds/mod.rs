//! # Inline Kinds
//!
//! Inline-specific types that own their delimiters and patterns. The pass
//! table in `passes` refers to these constants; it never hardcodes syntax.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` `code` ``, a raw zone
//! - **`Emphasis`**: `**bold**`, `__bold__`, `*italic*`, `_italic_`
//! - **`Strikethrough`**: `~~text~~`
//! - **`Image`** / **`Link`**: `![alt](url)` / `[text](url)`, http(s) only
//! - **`SoftBreak`**: the `<br />` joining paragraph lines

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod soft_break;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strikethrough};
pub use link::{Image, Link};
pub use soft_break::SoftBreak;
