//! Pagedex CLI — command-line interface for static search indexes.
//!
//! # Modules
//!
//! - [`cli`]: clap argument and command definitions
//! - [`config`]: layered TOML/env configuration
//! - [`app`]: the application shell (logging, dispatch)
//! - [`handlers`]: one handler per command

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod handlers;

// Re-export key types at crate root for convenience
pub use app::PagedexCli;
pub use cli::{CliArgs, Command};
pub use config::PagedexConfig;
