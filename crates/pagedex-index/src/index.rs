//! The search-index container.
//!
//! A [`SearchIndex`] holds the ordered sequence of [`IndexRecord`]s under
//! the single top-level `docs` array of the wire format. It is built once
//! by the documentation generator and read-only afterwards; no mutation
//! operations are exposed.
//!
//! Two wire forms are supported:
//!
//! - bare JSON: `{"docs": [...]}`
//! - the JavaScript shipped next to generated docs:
//!   `var documenterSearchIndex = {"docs": [...]};`
//!
//! Loading is all-or-nothing. Malformed input surfaces as
//! [`Error::Format`] with the underlying parse detail; no partial state
//! is produced.

use std::fs;
use std::path::Path;

use log::debug;
use pagedex_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::record::IndexRecord;

/// Variable name used when emitting the JavaScript wire form.
pub const JS_INDEX_VAR: &str = "documenterSearchIndex";

/// An ordered, immutable sequence of index records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndex {
    docs: Vec<IndexRecord>,
}

impl SearchIndex {
    /// Create an index from an already-ordered sequence of records.
    pub fn new(docs: Vec<IndexRecord>) -> Self {
        Self { docs }
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    /// Parse the bare JSON wire form: `{"docs": [...]}`.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let index: Self =
            serde_json::from_str(input).map_err(|e| Error::format(e.to_string()))?;
        debug!("loaded search index: {} records", index.len());
        Ok(index)
    }

    /// Parse the JavaScript wire form: `var <name> = {"docs": [...]};`.
    ///
    /// The assignment wrapper and trailing semicolon are stripped, and the
    /// `\'` escape (legal in JS string literals, illegal in JSON) is
    /// rewritten before parsing. Generated indexes really do contain it.
    pub fn from_js_str(input: &str) -> Result<Self> {
        let object = strip_js_wrapper(input)?;
        let json = rewrite_js_escapes(object);
        Self::from_json_str(&json)
    }

    /// Load an index file, dispatching on its contents.
    ///
    /// Input starting with `{` is treated as bare JSON; anything else as
    /// the JavaScript wrapper form.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::not_found(path.display().to_string()));
        }

        let contents = fs::read_to_string(path)?;
        if contents.trim_start().starts_with('{') {
            Self::from_json_str(&contents)
        } else {
            Self::from_js_str(&contents)
        }
    }

    // ------------------------------------------------------------------------
    // Access
    // ------------------------------------------------------------------------

    /// The records, in emission order.
    pub fn records(&self) -> &[IndexRecord] {
        &self.docs
    }

    /// Number of records in the index.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// True when the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Iterate the records in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, IndexRecord> {
        self.docs.iter()
    }

    // ------------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------------

    /// Serialize to the bare JSON wire form.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::format(e.to_string()))
    }

    /// Serialize to pretty-printed bare JSON.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::format(e.to_string()))
    }

    /// Serialize to the JavaScript wrapper form, suitable for dropping
    /// next to generated documentation.
    pub fn to_js_string(&self) -> Result<String> {
        Ok(format!("var {} = {};\n", JS_INDEX_VAR, self.to_json_string()?))
    }

    /// Write the bare JSON form to a file.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json_string_pretty()?)?;
        Ok(())
    }

    /// Write the JavaScript wrapper form to a file.
    pub fn write_js(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_js_string()?)?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a IndexRecord;
    type IntoIter = std::slice::Iter<'a, IndexRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Rewrite the JS-only `\'` escape to a bare apostrophe.
///
/// Walks escape pairs so an escaped backslash followed by an apostrophe
/// (`\\` then `'`) passes through untouched instead of being mangled
/// into an invalid JSON escape.
fn rewrite_js_escapes(object: &str) -> String {
    let mut out = String::with_capacity(object.len());
    let mut chars = object.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\'') => out.push('\''),
            Some(next) => {
                out.push('\\');
                out.push(next);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Slice the object literal out of a `var <name> = {...};` assignment.
fn strip_js_wrapper(input: &str) -> Result<&str> {
    let start = input
        .find('{')
        .ok_or_else(|| Error::format("no object literal in JS index"))?;
    let end = input
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| Error::format("unterminated object literal in JS index"))?;
    Ok(&input[start..=end])
}

// ============================================================================
// Tests
// ============================================================================
