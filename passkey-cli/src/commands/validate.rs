//! Validate command implementation.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use tracing::info;

use crate::utils::load_export;

/// Execute the validate command.
pub fn execute(file: PathBuf, quiet: bool) -> Result<()> {
    let (export, _) = load_export(&file)?;

    let migrated = export
        .webauthn_devices
        .iter()
        .filter(|device| device.is_fido_u2f())
        .count();

    info!(
        path = %file.display(),
        devices = export.len(),
        migrated,
        "Export is valid"
    );

    if !quiet {
        println!(
            "{} {} device(s), {} migrated U2F",
            "Export is valid:".green().bold(),
            export.len(),
            migrated
        );
    }

    Ok(())
}
