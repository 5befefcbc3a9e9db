//! Pagedex Index — the static search-index data contract.
//!
//! A documentation build emits a search index wholesale; a browser-side
//! widget loads it read-only and matches substrings against it. This
//! crate models both halves of that contract.
//!
//! # Modules
//!
//! - [`record`]: `IndexRecord` and the page/section `Category`
//! - [`index`]: the `SearchIndex` container, loading and serialization
//! - [`search`]: lazy case-insensitive substring matching and snippets
//! - [`builder`]: generator-side construction with anchor slugs
//! - [`validate`]: structural invariant checks
//! - [`stats`]: corpus statistics

#![doc = include_str!("../README.md")]

pub mod builder;
pub mod index;
pub mod record;
pub mod search;
pub mod stats;
pub mod validate;

// Re-export key types at crate root for convenience
pub use builder::{slugify, IndexBuilder};
pub use index::{SearchIndex, JS_INDEX_VAR};
pub use record::{Category, IndexRecord};
pub use search::{snippet, Matches};
pub use stats::IndexStats;
pub use validate::{ValidationIssue, ValidationReport};
