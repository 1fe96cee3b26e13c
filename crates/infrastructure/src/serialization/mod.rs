//! Serialization for summaries, options and exports.
//!
//! Export documents are written deterministically:
//! - Header maps sorted alphabetically (via `BTreeMap` in domain types)
//! - 2-space indentation
//! - Trailing newline
//! - UTF-8 encoding without BOM

mod json;

pub use json::*;
