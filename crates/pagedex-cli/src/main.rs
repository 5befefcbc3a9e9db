//! Entry point for the `pagedex` binary.

use std::process::ExitCode;

use clap::Parser;
use pagedex_cli::{CliArgs, PagedexCli};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let result = PagedexCli::from_args("pagedex", &args).and_then(|app| app.run(args));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
