//! Index invariant validation.
//!
//! The index is machine-generated, so a consumer should be able to
//! report what is wrong with it rather than refuse the whole file:
//! `load` only enforces the wire shape, and this module checks the
//! structural invariants on top of it:
//!
//! - every `location` is unique;
//! - records are grouped contiguously by `page`;
//! - page records carry no anchor;
//! - section records carry a non-empty title and an anchor, and their
//!   path matches a preceding page record for the same page.
//!
//! All checks run to completion; nothing short-circuits.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::index::SearchIndex;
use crate::record::Category;

// ============================================================================
// Issue types
// ============================================================================

/// A single invariant violation found in an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Two records share the same `location`.
    DuplicateLocation { location: String },

    /// A page record carries an anchor fragment.
    PageWithAnchor { location: String },

    /// A section record has an empty title.
    SectionWithoutTitle { location: String },

    /// A section record has no anchor, or its path does not match a
    /// preceding page record for the same page.
    SectionAnchorMismatch { location: String, page: String },

    /// A page's records are not contiguous in emission order.
    PageNotContiguous { page: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLocation { location } => {
                write!(f, "duplicate location: {location}")
            }
            Self::PageWithAnchor { location } => {
                write!(f, "page record carries an anchor: {location}")
            }
            Self::SectionWithoutTitle { location } => {
                write!(f, "section record without a title: {location}")
            }
            Self::SectionAnchorMismatch { location, page } => {
                write!(
                    f,
                    "section location {location} does not extend a page record for \"{page}\""
                )
            }
            Self::PageNotContiguous { page } => {
                write!(f, "records for page \"{page}\" are not contiguous")
            }
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// The collected result of validating an index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when no issues were found.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The issues found, in index order.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "index is valid");
        }
        writeln!(f, "{} issue(s) found:", self.issues.len())?;
        for issue in &self.issues {
            writeln!(f, "  - {issue}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Validation
// ============================================================================

impl SearchIndex {
    /// Check every structural invariant, collecting all violations.
    pub fn validate(&self) -> ValidationReport {
        let mut issues = Vec::new();

        let mut seen_locations: HashSet<&str> = HashSet::new();
        let mut page_paths: HashMap<&str, &str> = HashMap::new();
        let mut finished_pages: HashSet<&str> = HashSet::new();
        let mut previous_page: Option<&str> = None;

        for record in self {
            if !seen_locations.insert(record.location.as_str()) {
                issues.push(ValidationIssue::DuplicateLocation {
                    location: record.location.clone(),
                });
            }

            // Contiguity: once a page's run ends, it must not reappear.
            if previous_page != Some(record.page.as_str()) {
                if let Some(prev) = previous_page {
                    finished_pages.insert(prev);
                }
                if finished_pages.contains(record.page.as_str()) {
                    issues.push(ValidationIssue::PageNotContiguous {
                        page: record.page.clone(),
                    });
                }
                previous_page = Some(record.page.as_str());
            }

            match record.category {
                Category::Page => {
                    if record.anchor().is_some() {
                        issues.push(ValidationIssue::PageWithAnchor {
                            location: record.location.clone(),
                        });
                    }
                    page_paths.insert(record.page.as_str(), record.path());
                }
                Category::Section => {
                    if record.title.is_empty() {
                        issues.push(ValidationIssue::SectionWithoutTitle {
                            location: record.location.clone(),
                        });
                    }
                    let extends_page = record.anchor().is_some()
                        && page_paths.get(record.page.as_str()) == Some(&record.path());
                    if !extends_page {
                        issues.push(ValidationIssue::SectionAnchorMismatch {
                            location: record.location.clone(),
                            page: record.page.clone(),
                        });
                    }
                }
            }
        }

        ValidationReport { issues }
    }
}

// ============================================================================
// Tests
// ============================================================================
