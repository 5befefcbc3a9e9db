//! Error types for Pagedex operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all Pagedex crates. Uses `thiserror` for derive macros.
//!
//! A search index is produced wholesale by a documentation build and is
//! immutable afterwards, so the taxonomy is small: an index either loads
//! cleanly or fails with a format error. There is no partial-load or
//! retry concept.

use thiserror::Error;

/// Errors that can occur in Pagedex operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed index input: missing required field, unrecognized
    /// category, or invalid serialization.
    #[error("Format error: {0}")]
    Format(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Index file or resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Create a format error.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// True when this error was raised at index load time.
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

/// Result type alias using Pagedex's Error type.
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Tests
// ============================================================================
