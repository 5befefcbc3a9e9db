//! The `pagedex` CLI application.
//!
//! Wires argument parsing, configuration loading, and logging
//! initialization together, and dispatches commands to handlers.

use std::path::Path;

use pagedex_core::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command};
use crate::config::PagedexConfig;
use crate::handlers;

// ============================================================================
// PagedexCli
// ============================================================================

/// The CLI application: name, version, and loaded configuration.
pub struct PagedexCli {
    name: String,
    version: String,
    config: PagedexConfig,
}

impl PagedexCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = PagedexConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: PagedexConfig) -> Self {
        Self {
            name: name.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            config,
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &PagedexConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::Search {
                query,
                limit,
                category,
                json,
            }) => {
                let index_path = self.config.resolve_index_path(args.index.as_deref())?;
                let options = handlers::SearchOptions {
                    query,
                    limit,
                    category,
                    json,
                };
                handlers::handle_search(&self.config, &index_path, &options)
            }
            Some(Command::Validate) => {
                let index_path = self.config.resolve_index_path(args.index.as_deref())?;
                handlers::handle_validate(&index_path)
            }
            Some(Command::Stats) => {
                let index_path = self.config.resolve_index_path(args.index.as_deref())?;
                handlers::handle_stats(&index_path)
            }
            Some(Command::Convert { output, js }) => {
                let index_path = self.config.resolve_index_path(args.index.as_deref())?;
                handlers::handle_convert(&index_path, Path::new(&output), js)
            }
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            None => {
                println!("{} {} — use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
