//! Command handlers for the `pagedex` CLI.
//!
//! Each handler loads the index fresh, performs one operation, and
//! prints to stdout. Errors propagate to the binary entry point.

use std::path::Path;

use pagedex_core::{Error, Result};
use pagedex_index::{snippet, Category, SearchIndex};
use tracing::debug;

use crate::config::PagedexConfig;

/// Options for the `search` command.
#[derive(Debug)]
pub struct SearchOptions {
    /// Query string.
    pub query: String,
    /// Result cap; falls back to the configured default.
    pub limit: Option<usize>,
    /// Optional category filter ("page" or "section").
    pub category: Option<String>,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

/// Search the index and print matching records.
pub fn handle_search(
    config: &PagedexConfig,
    index_path: &Path,
    options: &SearchOptions,
) -> Result<()> {
    let index = SearchIndex::from_path(index_path)?;
    debug!(records = index.len(), "index loaded");

    let category = options.category.as_deref().map(parse_category).transpose()?;
    let limit = options.limit.unwrap_or(config.search.default_limit);

    let mut shown = 0;
    for record in index.find(&options.query) {
        if let Some(want) = category {
            if record.category != want {
                continue;
            }
        }
        if shown >= limit {
            break;
        }

        if options.json {
            let line =
                serde_json::to_string(record).map_err(|e| Error::format(e.to_string()))?;
            println!("{line}");
        } else {
            println!("{}  {} ({})", record.location, record.title, record.page);
            if let Some(excerpt) =
                snippet(&record.text, &options.query, config.search.snippet_length)
            {
                println!("    {excerpt}");
            }
        }
        shown += 1;
    }

    if shown == 0 && !options.json {
        println!("no matches for \"{}\"", options.query);
    }
    Ok(())
}

/// Validate the index; invariant violations surface as an error.
pub fn handle_validate(index_path: &Path) -> Result<()> {
    let index = SearchIndex::from_path(index_path)?;
    let report = index.validate();
    if report.is_valid() {
        println!("index is valid ({} records)", index.len());
        Ok(())
    } else {
        Err(Error::format(report.to_string()))
    }
}

/// Print corpus statistics.
pub fn handle_stats(index_path: &Path) -> Result<()> {
    let index = SearchIndex::from_path(index_path)?;
    print!("{}", index.stats());
    Ok(())
}

/// Rewrite the index in the requested wire form.
pub fn handle_convert(index_path: &Path, output: &Path, js: bool) -> Result<()> {
    let index = SearchIndex::from_path(index_path)?;
    if js {
        index.write_js(output)?;
    } else {
        index.write_json(output)?;
    }
    println!("wrote {} records to {}", index.len(), output.display());
    Ok(())
}

fn parse_category(value: &str) -> Result<Category> {
    match value {
        "page" => Ok(Category::Page),
        "section" => Ok(Category::Section),
        other => Err(Error::config(format!(
            "unknown category: {other} (expected page or section)"
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pagedex_index::IndexBuilder;

    fn write_index(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let mut builder = IndexBuilder::new();
        builder.page("index.html", "Home");
        builder.page("guide.html", "Guide");
        builder
            .section("Block Cholesky", "factorizing block-symmetric matrices")
            .unwrap();
        let path = dir.path().join("search_index.json");
        builder.build().write_json(&path).unwrap();
        path
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("page").unwrap(), Category::Page);
        assert_eq!(parse_category("section").unwrap(), Category::Section);
        assert!(parse_category("chapter").is_err());
    }

    #[test]
    fn test_handle_search_ok() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_index(&dir);
        let options = SearchOptions {
            query: "cholesky".to_string(),
            limit: None,
            category: None,
            json: false,
        };
        assert!(handle_search(&PagedexConfig::default(), &path, &options).is_ok());
    }

    #[test]
    fn test_handle_search_json_mode() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_index(&dir);
        let options = SearchOptions {
            query: "cholesky".to_string(),
            limit: Some(1),
            category: Some("section".to_string()),
            json: true,
        };
        assert!(handle_search(&PagedexConfig::default(), &path, &options).is_ok());
    }

    #[test]
    fn test_handle_search_bad_category() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_index(&dir);
        let options = SearchOptions {
            query: "cholesky".to_string(),
            limit: None,
            category: Some("chapter".to_string()),
            json: false,
        };
        let err = handle_search(&PagedexConfig::default(), &path, &options).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_handle_search_missing_index() {
        let options = SearchOptions {
            query: "anything".to_string(),
            limit: None,
            category: None,
            json: false,
        };
        let err = handle_search(
            &PagedexConfig::default(),
            Path::new("/nonexistent/index.js"),
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_handle_validate_clean_index() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_index(&dir);
        assert!(handle_validate(&path).is_ok());
    }

    #[test]
    fn test_handle_validate_broken_index() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(
            &path,
            r#"{"docs": [
                {"location": "a.html#", "page": "A", "title": "A", "category": "page", "text": ""},
                {"location": "a.html#", "page": "A", "title": "A", "category": "page", "text": ""}
            ]}"#,
        )
        .unwrap();

        let err = handle_validate(&path).unwrap_err();
        assert!(err.is_format());
        assert!(err.to_string().contains("duplicate location"));
    }

    #[test]
    fn test_handle_stats() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_index(&dir);
        assert!(handle_stats(&path).is_ok());
    }

    #[test]
    fn test_handle_convert_to_js_and_back() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_index(&dir);

        let js_path = dir.path().join("search_index.js");
        handle_convert(&path, &js_path, true).unwrap();

        let json_path = dir.path().join("round_trip.json");
        handle_convert(&js_path, &json_path, false).unwrap();

        let original = SearchIndex::from_path(&path).unwrap();
        let round_tripped = SearchIndex::from_path(&json_path).unwrap();
        assert_eq!(round_tripped, original);
    }
}
