//! mobilegen entry point.
//!
//! Parses the command line, runs one generation and maps failures to exit codes.

use std::process::ExitCode;

use clap::Parser;
use mobilegen::cli::Cli;
use mobilegen::run;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.report();
            eprintln!("error: {err}");
            code.into()
        }
    }
}
