//! # Snapshot Testing Support
//!
//! Utilities for testing the renderer via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`invariants`**: runtime checks on rendered output (only the fixed tag
//!   vocabulary appears, every other metacharacter is escaped, entities are
//!   well formed)
//!
//! ## Testing Strategy
//!
//! Rendering behaviour is pinned by snapshot tests over markdown fixtures
//! rather than a separate formal grammar. Every snapshot test also runs the
//! invariant checks.

pub mod invariants;

pub use invariants::check as invariants;
