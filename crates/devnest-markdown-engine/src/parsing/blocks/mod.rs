//! # Block Parsing
//!
//! Two-phase, line-at-a-time block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line outside a code block is
//!    classified into a `LineClass` from its own text alone
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` holds at most one
//!    open structure and emits a `Block` whenever it closes
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `ListKind`
//! - **`kinds`**: block-specific recognisers with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine
//! - **`html`**: `Block::to_html`
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Lists and blockquotes are flat; indentation is not significant
//! - Nothing buffered is dropped at end of input

pub mod builder;
pub mod classify;
pub mod html;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, ListKind};
