//! List built-in layout fixtures.

use crate::cli::ExitCode;
use crate::layouts;
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

/// List the names of all built-in layout fixtures
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListResult<'a> {
    layouts: &'a [&'a str],
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> Result<ExitCode> {
        if self.json {
            let result = ListResult {
                layouts: layouts::LAYOUT_NAMES,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&result).context("Failed to serialize JSON")?
            );
        } else {
            for name in layouts::LAYOUT_NAMES {
                println!("{name}");
            }
        }

        Ok(ExitCode::Success)
    }
}
