//! # devnest-markdown-engine
//!
//! Safe rendering of the blog's markdown dialect: post bodies, comments,
//! comment previews and the live editor preview all go through [`render`].
//!
//! The output is injected into pages without further sanitization, so the
//! renderer is the injection boundary. All user text is escaped before any
//! inline syntax is recognised, and only a fixed set of elements is ever
//! emitted.

pub mod escape;
pub mod parsing;
pub mod render;

pub use escape::{escape_html, escape_unsafe_html};
pub use parsing::{ParsedDoc, blocks::Block, parse_document};
pub use render::{DEFAULT_SNIPPET_CHARS, render, render_blocks, render_snippet, snippet};
