//! Pagedex — static search indexes for documentation sites.
//!
//! This umbrella crate re-exports the public API of the workspace:
//! the [`SearchIndex`] container and its records, the builder, and the
//! shared error types. Enable the `cli` feature for the command-line
//! application.
//!
//! # Example
//!
//! ```
//! use pagedex::{IndexBuilder, Result};
//!
//! fn main() -> Result<()> {
//!     let mut builder = IndexBuilder::new();
//!     builder.page("index.html", "Home");
//!     builder.section("Getting started", "install and run")?;
//!     let index = builder.build();
//!
//!     let hits: Vec<_> = index.find("install").collect();
//!     assert_eq!(hits.len(), 1);
//!     assert_eq!(hits[0].location, "index.html#Getting-started-1");
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]

pub use pagedex_core::{Error, Result};
pub use pagedex_index::{
    builder, index, record, search, stats, validate, slugify, snippet, Category, IndexBuilder,
    IndexRecord, IndexStats, Matches, SearchIndex, ValidationIssue, ValidationReport,
};

#[cfg(feature = "cli")]
pub use pagedex_cli as cli;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_compose() {
        let index = SearchIndex::from_json_str(
            r#"{"docs": [
                {"location": "a.html#", "page": "Home", "title": "Home", "category": "page", "text": ""},
                {"location": "b.html#", "page": "B", "title": "B", "category": "page", "text": ""},
                {"location": "b.html#Foo-1", "page": "B", "title": "Foo", "category": "section", "text": "bar baz"}
            ]}"#,
        )
        .unwrap();

        let hits: Vec<&IndexRecord> = index.find("foo").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, Category::Section);
        assert_eq!(index.find("qux").count(), 0);
        assert!(index.validate().is_valid());
    }
}
