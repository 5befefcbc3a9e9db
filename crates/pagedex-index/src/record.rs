//! Index record types.
//!
//! An [`IndexRecord`] is one entry in a documentation search index: either
//! a whole page or one heading (section) within a page. Records carry
//! exactly the five string fields emitted by the site generator, with
//! `category` restricted to the two literal values `"page"` and
//! `"section"`.
//!
//! Serde rules mirror the wire contract: `location`, `page`, and
//! `category` are required; `title` and `text` default to the empty
//! string when absent.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// Discriminator distinguishing whole-page entries from section entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The record represents a document as a whole; its location carries
    /// no anchor text.
    Page,

    /// The record represents one heading within a document; it always
    /// carries a non-empty title and an anchor.
    Section,
}

impl Category {
    /// The wire-format string for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Section => "section",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// IndexRecord
// ============================================================================

/// One entry in the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Relative URL: page path plus optional `#anchor`. Page records end
    /// with a bare `#`; section records carry a slug-with-suffix anchor.
    pub location: String,

    /// Human-readable page name, constant across all records of a page.
    pub page: String,

    /// Heading text for the record; may be empty for whole-page records.
    #[serde(default)]
    pub title: String,

    /// Whether this record covers a whole page or a single section.
    pub category: Category,

    /// Indexed prose content; may be empty for landing pages.
    #[serde(default)]
    pub text: String,
}

impl IndexRecord {
    /// The page path portion of `location`, without any `#anchor`.
    pub fn path(&self) -> &str {
        match self.location.find('#') {
            Some(pos) => &self.location[..pos],
            None => &self.location,
        }
    }

    /// The anchor fragment of `location`, if present and non-empty.
    ///
    /// Page records end in a bare `#`, which reads as no anchor.
    pub fn anchor(&self) -> Option<&str> {
        self.location
            .find('#')
            .map(|pos| &self.location[pos + 1..])
            .filter(|frag| !frag.is_empty())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn section_record() -> IndexRecord {
        IndexRecord {
            location: "block_arrays_ext.html#Why-bother?-1".to_string(),
            page: "BlockArrays extensions".to_string(),
            title: "Why bother?".to_string(),
            category: Category::Section,
            text: "The last property is particularly important".to_string(),
        }
    }

    #[test]
    fn test_category_as_str() {
        assert_eq!(Category::Page.as_str(), "page");
        assert_eq!(Category::Section.as_str(), "section");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Page.to_string(), "page");
        assert_eq!(Category::Section.to_string(), "section");
    }

    #[test]
    fn test_category_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Page).unwrap(), "\"page\"");
        let parsed: Category = serde_json::from_str("\"section\"").unwrap();
        assert_eq!(parsed, Category::Section);
    }

    #[test]
    fn test_category_serde_rejects_unknown() {
        let result: Result<Category, _> = serde_json::from_str("\"chapter\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_record_path_and_anchor() {
        let record = section_record();
        assert_eq!(record.path(), "block_arrays_ext.html");
        assert_eq!(record.anchor(), Some("Why-bother?-1"));
    }

    #[test]
    fn test_record_bare_hash_has_no_anchor() {
        let record = IndexRecord {
            location: "index.html#".to_string(),
            page: "Home".to_string(),
            title: "Home".to_string(),
            category: Category::Page,
            text: String::new(),
        };
        assert_eq!(record.path(), "index.html");
        assert_eq!(record.anchor(), None);
    }

    #[test]
    fn test_record_without_hash() {
        let record = IndexRecord {
            location: "index.html".to_string(),
            page: "Home".to_string(),
            title: String::new(),
            category: Category::Page,
            text: String::new(),
        };
        assert_eq!(record.path(), "index.html");
        assert_eq!(record.anchor(), None);
    }

    #[test]
    fn test_record_deserialize_defaults_title_and_text() {
        let json = r#"{"location": "a.html#", "page": "A", "category": "page"}"#;
        let record: IndexRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "");
        assert_eq!(record.text, "");
        assert_eq!(record.category, Category::Page);
    }

    #[test]
    fn test_record_deserialize_missing_location_fails() {
        let json = r#"{"page": "A", "title": "A", "category": "page", "text": ""}"#;
        let result: Result<IndexRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_serialize_emits_all_fields() {
        let record = section_record();
        let json = serde_json::to_string(&record).unwrap();
        for field in ["location", "page", "title", "category", "text"] {
            assert!(json.contains(field), "missing field {field} in {json}");
        }
    }

    #[test]
    fn test_record_round_trip() {
        let record = section_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: IndexRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
