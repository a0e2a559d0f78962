//! Validation command for layout fixtures.

use crate::cli::ExitCode;
use crate::layouts;
use crate::models::DefaultCustomizer;
use crate::validator::FixtureValidator;
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

/// Validate a layout fixture for authoring errors and warnings
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Name of the layout fixture (e.g., "swiss")
    #[arg(short, long, value_name = "NAME")]
    pub layout: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct ValidationResponse {
    layout: String,
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<ExitCode> {
        let fixture = layouts::by_name(&self.layout, Box::new(DefaultCustomizer))?;
        let report = FixtureValidator::new(&fixture).validate();

        let failed = !report.is_valid() || (self.strict && !report.warnings.is_empty());

        if self.json {
            let response = ValidationResponse {
                layout: fixture.name().to_string(),
                valid: report.is_valid(),
                errors: report.errors.iter().map(ToString::to_string).collect(),
                warnings: report.warnings.iter().map(ToString::to_string).collect(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response).context("Failed to serialize JSON")?
            );
        } else if failed {
            print!("{}", report.format_message());
        } else {
            println!("Layout '{}' passed validation", fixture.name());
            if !report.warnings.is_empty() {
                print!("{}", report.format_message());
            }
        }

        if failed {
            return Ok(ExitCode::ValidationFailed);
        }

        Ok(ExitCode::Success)
    }
}
