//! Normalize command implementation.
//!
//! Decodes an export and writes it back in canonical form, so a backup can be
//! checked and rewritten before it is restored.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use passkey_core::ExportFormat;
use tracing::{debug, info};

use crate::utils::load_export;

/// Execute the normalize command.
///
/// Without an explicit `format` the export is written in the format it was
/// read in.
pub fn execute(
    file: PathBuf,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
    quiet: bool,
) -> Result<()> {
    let (export, input_format) = load_export(&file)?;
    let format = format.unwrap_or(input_format);
    let text = export
        .encode(format)
        .context("Failed to serialize export")?;
    let text = text.trim_end();

    debug!(devices = export.len(), bytes = text.len(), %format, "Re-encoded export");

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{text}\n"))
                .with_context(|| format!("Failed to write export file: {}", path.display()))?;

            info!(path = %path.display(), devices = export.len(), "Export written");

            if !quiet {
                eprintln!(
                    "{} {} device(s) to {}",
                    "Normalized".green().bold(),
                    export.len(),
                    path.display()
                );
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}").context("Failed to write export to stdout")?;
        }
    }

    Ok(())
}
