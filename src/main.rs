//! Keyboard Layout Fixtures - expected-key tables for input-method tests.
//!
//! This binary gives harness scripts and CI headless access to the built-in
//! fixtures: listing, printing, validating, and exporting them as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use kbd_fixtures::cli::{ExitCode, ExportArgs, ListArgs, ShowArgs, ValidateArgs};
use kbd_fixtures::constants::{APP_BINARY_NAME, APP_NAME};

/// Keyboard Layout Fixtures - expected-key tables for input-method tests
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about = APP_NAME, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the names of all built-in layout fixtures
    List(ListArgs),
    /// Show a layout fixture's expected-key table
    Show(ShowArgs),
    /// Validate a layout fixture for authoring errors and warnings
    Validate(ValidateArgs),
    /// Export a layout fixture to a JSON file
    Export(ExportArgs),
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Command::List(args) => args.execute()?,
        Command::Show(args) => args.execute()?,
        Command::Validate(args) => args.execute()?,
        Command::Export(args) => args.execute()?,
    };

    if exit_code != ExitCode::Success {
        std::process::exit(exit_code.code());
    }

    Ok(())
}
