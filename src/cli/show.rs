//! Print one fixture's expected-key table.

use crate::cli::ExitCode;
use crate::layouts;
use crate::models::{DefaultCustomizer, KeyLabel};
use anyhow::{Context, Result};
use clap::Args;

/// Show a layout fixture's expected-key table
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Name of the layout fixture (e.g., "swiss")
    #[arg(short, long, value_name = "NAME")]
    pub layout: String,

    /// Resolve the phone form factor instead of tablet
    #[arg(long)]
    pub phone: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> Result<ExitCode> {
        let fixture = layouts::by_name(&self.layout, Box::new(DefaultCustomizer))?;
        log::debug!("showing layout '{}' (phone: {})", fixture.name(), self.phone);

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&fixture).context("Failed to serialize JSON")?
            );
            return Ok(ExitCode::Success);
        }

        println!("Layout:  {}", fixture.name());
        println!(
            "Symbols: {} / {}",
            fixture.symbols_layout(),
            fixture.symbols_shifted_layout()
        );
        println!();

        let table = fixture.common_alphabet_layout(self.phone);
        for (index, row) in table.rows().iter().enumerate() {
            let rendered: Vec<String> = row.keys().iter().map(render_key).collect();
            println!("Row {}: {}", index + 1, rendered.join(" "));
        }

        Ok(ExitCode::Success)
    }
}

/// Renders one key as `label` or `label(alt1 alt2)`, slots as `<NAME>`.
fn render_key(key: &crate::models::ExpectedKey) -> String {
    let label = match &key.label {
        KeyLabel::Literal(s) => s.clone(),
        KeyLabel::Slot(id) => format!("<{id}>"),
    };

    if key.has_more_keys() {
        format!("{}({})", label, key.more_keys.join(" "))
    } else {
        label
    }
}
