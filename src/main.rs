//! mcgradle CLI entry point
//!
//! Parses the command line, runs the command and, on failure, prints a
//! user-friendly error with suggestions before exiting with status 1.

use clap::Parser;
use mcgradle_cli::cli;
use mcgradle_cli::core::user_friendly_error;

fn main() {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Err(e) = cli.execute() {
        let error_ctx = user_friendly_error(e);
        error_ctx.display();
        std::process::exit(1);
    }
}
