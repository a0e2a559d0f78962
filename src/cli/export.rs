//! Export a fixture as JSON for external harnesses.

use crate::cli::ExitCode;
use crate::layouts;
use crate::models::DefaultCustomizer;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Export a layout fixture to a JSON file
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Name of the layout fixture (e.g., "swiss")
    #[arg(short, long, value_name = "NAME")]
    pub layout: String,

    /// Path of the JSON file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> Result<ExitCode> {
        let fixture = layouts::by_name(&self.layout, Box::new(DefaultCustomizer))?;

        let json = serde_json::to_string_pretty(&fixture)
            .with_context(|| format!("Failed to serialize layout '{}'", fixture.name()))?;

        fs::write(&self.output, json)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        log::debug!("exported '{}' to {}", fixture.name(), self.output.display());
        println!("Exported '{}' to {}", fixture.name(), self.output.display());

        Ok(ExitCode::Success)
    }
}
