// textent/src/render.rs
//! Terminal rendering of analysis results.

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use textent_core::{EntropyResult, Status};

use crate::cli::OutputFormat;

/// Renders `result` in the requested format. Text output is colored only
/// when stdout is a terminal.
pub fn render(result: &EntropyResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Text => Ok(render_text(result, std::io::stdout().is_terminal())),
    }
}

fn render_text(result: &EntropyResult, color: bool) -> String {
    let label = match result.status {
        Status::Normal => "normal",
        Status::Warning => "warning",
    };
    let label = if color {
        match result.status {
            Status::Normal => label.green().to_string(),
            Status::Warning => label.red().to_string(),
        }
    } else {
        label.to_string()
    };
    format!(
        "{label}  entropy {progress:>3}/100  {message}",
        progress = result.progress,
        message = result.message
    )
}
