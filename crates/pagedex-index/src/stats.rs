//! Corpus statistics.
//!
//! [`IndexStats`] summarizes an index for operators: record counts by
//! category, per-page section counts, and how much prose is actually
//! indexed. The CLI prints the rendered summary.

use std::fmt;

use crate::index::SearchIndex;
use crate::record::Category;

/// Summary statistics for a search index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Total number of records.
    pub records: usize,

    /// Number of whole-page records.
    pub pages: usize,

    /// Number of section records.
    pub sections: usize,

    /// Total bytes of indexed prose across all records.
    pub text_bytes: usize,

    /// Section count per page, in emission order.
    pub sections_per_page: Vec<(String, usize)>,
}

impl SearchIndex {
    /// Compute summary statistics over the whole index.
    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats {
            records: self.len(),
            ..Default::default()
        };

        for record in self {
            stats.text_bytes += record.text.len();
            match record.category {
                Category::Page => {
                    stats.pages += 1;
                    stats.sections_per_page.push((record.page.clone(), 0));
                }
                Category::Section => {
                    stats.sections += 1;
                    let pos = stats
                        .sections_per_page
                        .iter()
                        .position(|(page, _)| page == &record.page);
                    match pos {
                        Some(i) => stats.sections_per_page[i].1 += 1,
                        // Section without a page record still counts.
                        None => stats.sections_per_page.push((record.page.clone(), 1)),
                    }
                }
            }
        }

        stats
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "records:    {}", self.records)?;
        writeln!(f, "pages:      {}", self.pages)?;
        writeln!(f, "sections:   {}", self.sections)?;
        writeln!(f, "text bytes: {}", self.text_bytes)?;
        for (page, count) in &self.sections_per_page {
            writeln!(f, "  {page}: {count} section(s)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
