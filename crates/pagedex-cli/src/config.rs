//! Configuration for the `pagedex` CLI.
//!
//! Provides the [`PagedexConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `PAGEDEX_CONFIG` environment variable
//! 3. XDG default: `~/.config/pagedex/config.toml`
//! 4. Built-in defaults

use std::path::PathBuf;

use confyg::{env, Confygery};
use pagedex_core::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the `pagedex` CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PagedexConfig {
    /// Path to the search index file.
    pub index_path: Option<String>,

    /// Search presentation settings.
    pub search: SearchSettings,
}

/// Settings for search output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum number of results printed when `--limit` is absent.
    pub default_limit: usize,

    /// Target snippet length in bytes.
    pub snippet_length: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: 10,
            snippet_length: 120,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl PagedexConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// Loading priority:
    /// 1. Explicit `config_path` (from `--config` flag)
    /// 2. `PAGEDEX_CONFIG` env var
    /// 3. XDG default: `~/.config/pagedex/config.toml`
    /// 4. Built-in defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("PAGEDEX");
        env_opts.add_section("search");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        // 1. Explicit --config flag
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        // 2. PAGEDEX_CONFIG env var
        if let Ok(path) = std::env::var("PAGEDEX_CONFIG") {
            return Some(PathBuf::from(path));
        }

        // 3. XDG default
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pagedex").join("config.toml"))
    }

    /// Resolve the index path: explicit `--index` flag wins over config.
    pub fn resolve_index_path(&self, explicit: Option<&str>) -> Result<PathBuf> {
        explicit
            .or(self.index_path.as_deref())
            .map(PathBuf::from)
            .ok_or_else(|| {
                Error::config("no index path: pass --index or set index_path in config")
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
