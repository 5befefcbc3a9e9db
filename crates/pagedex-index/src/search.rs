//! Substring matching over an index.
//!
//! This is the consumer half of the contract: the client-side widget
//! performs case-insensitive substring matching against `title` and
//! `text`, nothing more. No tokenization, no scoring; ties are broken by
//! emission order because there is no ranking at all.
//!
//! [`Matches`] is lazy and restartable: it borrows the index, yields
//! records on demand, and a `clone()` restarts the scan from the top.
//! The index is immutable after load, so any number of scans may run
//! concurrently without coordination.

use crate::index::SearchIndex;
use crate::record::IndexRecord;

impl SearchIndex {
    /// Find every record whose `title` or `text` contains `query` as a
    /// case-insensitive substring, in emission order.
    ///
    /// An empty (or whitespace-only) query matches nothing; returning
    /// the entire corpus for the empty string helps no one.
    pub fn find<'a>(&'a self, query: &str) -> Matches<'a> {
        let needle = if query.trim().is_empty() {
            String::new()
        } else {
            query.to_lowercase()
        };

        Matches {
            records: self.iter(),
            needle,
        }
    }
}

/// Lazy, restartable sequence of matching records.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    records: std::slice::Iter<'a, IndexRecord>,
    needle: String,
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a IndexRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.needle.is_empty() {
            return None;
        }
        self.records
            .by_ref()
            .find(|record| record_matches(record, &self.needle))
    }
}

/// The match predicate: `needle` must already be lowercased.
fn record_matches(record: &IndexRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle) || record.text.to_lowercase().contains(needle)
}

/// Best-effort excerpt of `text` around the first case-insensitive
/// occurrence of `query`, trimmed to word boundaries and capped near
/// `max_len` bytes, with `...` ellipses where text was cut.
///
/// Returns `None` when the query does not occur.
pub fn snippet(text: &str, query: &str, max_len: usize) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }

    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();
    let pos = text_lower.find(&query_lower)?;

    // Lowercasing can shift byte offsets for a handful of characters, so
    // clamp the match position onto a boundary of the original text.
    let pos = floor_char_boundary(text, pos.min(text.len()));

    let context = max_len / 4;
    let start = floor_char_boundary(text, pos.saturating_sub(context));
    let end = floor_char_boundary(text, (start + max_len).min(text.len()));

    // Widen to word boundaries where possible. The preceding whitespace
    // char may be multi-byte (NBSP, ideographic space), so step past it
    // by its encoded length.
    let start = if start > 0 {
        text[..start]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(p, c)| p + c.len_utf8())
            .unwrap_or(start)
    } else {
        0
    };
    let end = if end < text.len() {
        text[end..].find(char::is_whitespace).map(|p| end + p).unwrap_or(end)
    } else {
        text.len()
    };

    let mut out = String::new();
    if start > 0 {
        out.push_str("...");
    }
    out.push_str(text[start..end].trim());
    if end < text.len() {
        out.push_str("...");
    }

    Some(out)
}

/// Largest char boundary at or below `pos`.
fn floor_char_boundary(text: &str, mut pos: usize) -> usize {
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

// ============================================================================
// Tests
// ============================================================================
