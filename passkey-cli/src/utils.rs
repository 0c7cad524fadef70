//! Common utility functions shared across CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use passkey_core::{DeviceExport, ExportFormat};
use tracing::debug;

/// Load and strictly decode an export file.
///
/// `.yaml` and `.yml` files are read as YAML, everything else as JSON.
pub fn load_export(path: &Path) -> Result<(DeviceExport, ExportFormat)> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read export file: {}", path.display()))?;

    let format = ExportFormat::from_path(path);
    debug!(path = %path.display(), bytes = text.len(), %format, "Read export");

    let export = DeviceExport::decode(&text, format)
        .with_context(|| format!("Failed to decode export file: {}", path.display()))?;

    Ok((export, format))
}

/// Format a timestamp as a human-readable UTC string.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-01-15 12:30:45 UTC");
    }

    #[test]
    fn test_load_missing_export() {
        let err = load_export(Path::new("definitely-missing-export.json")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read export file"));
    }
}
