//! CLI argument parsing and command definitions.
//!
//! Provides the `pagedex` command structure: configuration, index
//! location, verbosity, and the search/validate/stats/convert commands.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments for the `pagedex` binary.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "PAGEDEX_CONFIG")]
    pub config: Option<String>,

    /// Path to the search index file (overrides configuration).
    #[arg(short, long, env = "PAGEDEX_INDEX")]
    pub index: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Commands supported by the `pagedex` binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the index for records matching a query.
    Search {
        /// Query string (case-insensitive substring).
        query: String,

        /// Maximum number of results to print.
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only show records of this category: page or section.
        #[arg(long)]
        category: Option<String>,

        /// Emit results as JSON, one record per line.
        #[arg(long)]
        json: bool,
    },

    /// Check the index against its structural invariants.
    Validate,

    /// Print corpus statistics.
    Stats,

    /// Rewrite the index in another wire form.
    Convert {
        /// Output file path.
        #[arg(short, long)]
        output: String,

        /// Write the JavaScript wrapper form instead of bare JSON.
        #[arg(long)]
        js: bool,
    },

    /// Print version information.
    Version,
}

// ============================================================================
// Tests
// ============================================================================
