//! Building well-formed indexes.
//!
//! [`IndexBuilder`] is the producer half of the contract: the shape a
//! documentation generator emits. Pages open with a whole-page record
//! (`location` ending in a bare `#`), and each section within the
//! current page gets an anchor derived from its title.
//!
//! Anchor slugs keep the title's case and punctuation and replace
//! whitespace runs with `-`; a numeric suffix (`-1`, `-2`, ...) makes
//! colliding slugs unique within a page. Every anchor carries the
//! suffix, including the first occurrence, so "Why bother?" becomes
//! `Why-bother?-1`.

use std::collections::HashMap;

use pagedex_core::{Error, Result};

use crate::index::SearchIndex;
use crate::record::{Category, IndexRecord};

/// Incrementally assembles a [`SearchIndex`] that satisfies the wire
/// invariants by construction.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    docs: Vec<IndexRecord>,
    current: Option<CurrentPage>,
}

#[derive(Debug)]
struct CurrentPage {
    path: String,
    name: String,
    slug_uses: HashMap<String, usize>,
}

impl IndexBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new page.
    ///
    /// Emits the whole-page record (`category: page`, bare `#` anchor,
    /// empty text) and makes the page current for subsequent sections.
    pub fn page(&mut self, path: impl Into<String>, name: impl Into<String>) -> &mut Self {
        let path = path.into();
        let name = name.into();

        self.docs.push(IndexRecord {
            location: format!("{path}#"),
            page: name.clone(),
            title: name.clone(),
            category: Category::Page,
            text: String::new(),
        });
        self.current = Some(CurrentPage {
            path,
            name,
            slug_uses: HashMap::new(),
        });
        self
    }

    /// Add a section to the current page.
    ///
    /// # Errors
    ///
    /// Returns a format error when no page has been started, or when the
    /// section title is empty (section records always carry a title).
    pub fn section(
        &mut self,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<&mut Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(Error::format("section title must be non-empty"));
        }
        let page = self
            .current
            .as_mut()
            .ok_or_else(|| Error::format("section added before any page"))?;

        let slug = slugify(&title);
        let n = page.slug_uses.entry(slug.clone()).or_insert(0);
        *n += 1;

        self.docs.push(IndexRecord {
            location: format!("{}#{}-{}", page.path, slug, n),
            page: page.name.clone(),
            title,
            category: Category::Section,
            text: text.into(),
        });
        Ok(self)
    }

    /// Consume the builder and produce the finished index.
    pub fn build(self) -> SearchIndex {
        SearchIndex::new(self.docs)
    }
}

/// Derive an anchor slug from a section title: whitespace runs become a
/// single `-`; case and punctuation are kept.
pub fn slugify(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join("-")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_replaces_whitespace() {
        assert_eq!(slugify("Why bother?"), "Why-bother?");
        assert_eq!(slugify("Extensions to BlockArrays.jl"), "Extensions-to-BlockArrays.jl");
    }

    #[test]
    fn test_slugify_collapses_runs_and_trims() {
        assert_eq!(slugify("  a   b\tc "), "a-b-c");
        assert_eq!(slugify("single"), "single");
    }

    #[test]
    fn test_page_record_shape() {
        let mut builder = IndexBuilder::new();
        builder.page("index.html", "Home");
        let index = builder.build();

        assert_eq!(index.len(), 1);
        let record = &index.records()[0];
        assert_eq!(record.location, "index.html#");
        assert_eq!(record.page, "Home");
        assert_eq!(record.title, "Home");
        assert_eq!(record.category, Category::Page);
        assert_eq!(record.text, "");
    }

    #[test]
    fn test_section_anchor_carries_suffix() {
        let mut builder = IndexBuilder::new();
        builder.page("guide.html", "Guide");
        builder.section("Why bother?", "because").unwrap();
        let index = builder.build();

        let section = &index.records()[1];
        assert_eq!(section.location, "guide.html#Why-bother?-1");
        assert_eq!(section.category, Category::Section);
        assert_eq!(section.page, "Guide");
        assert_eq!(section.text, "because");
    }

    #[test]
    fn test_colliding_slugs_get_increasing_suffixes() {
        let mut builder = IndexBuilder::new();
        builder.page("api.html", "API");
        builder.section("Example", "one").unwrap();
        builder.section("Example", "two").unwrap();
        builder.section("Example", "three").unwrap();
        let index = builder.build();

        let locations: Vec<_> = index.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(
            locations[1..],
            ["api.html#Example-1", "api.html#Example-2", "api.html#Example-3"]
        );
    }

    #[test]
    fn test_slug_counters_reset_per_page() {
        let mut builder = IndexBuilder::new();
        builder.page("a.html", "A");
        builder.section("Usage", "").unwrap();
        builder.page("b.html", "B");
        builder.section("Usage", "").unwrap();
        let index = builder.build();

        assert_eq!(index.records()[1].location, "a.html#Usage-1");
        assert_eq!(index.records()[3].location, "b.html#Usage-1");
    }

    #[test]
    fn test_section_before_page_fails() {
        let mut builder = IndexBuilder::new();
        let err = builder.section("Orphan", "text").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_empty_section_title_fails() {
        let mut builder = IndexBuilder::new();
        builder.page("a.html", "A");
        assert!(builder.section("   ", "text").unwrap_err().is_format());
    }

    #[test]
    fn test_built_index_validates_clean() {
        let mut builder = IndexBuilder::new();
        builder.page("index.html", "Home");
        builder.page("guide.html", "Guide");
        builder.section("Setup", "how to set up").unwrap();
        builder.section("Setup", "again").unwrap();
        builder.section("Teardown", "how to tear down").unwrap();
        let index = builder.build();

        let report = index.validate();
        assert!(report.is_valid(), "unexpected issues: {report}");
    }
}
