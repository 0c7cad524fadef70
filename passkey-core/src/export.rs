//! Backup and restore documents
//!
//! An export document lists devices under the `webauthn_devices` key:
//!
//! ```json
//! { "webauthn_devices": [ { "created_at": "...", "kid": "...", ... } ] }
//! ```
//!
//! The same document is accepted as YAML, the format older backups were
//! written in. Decoding is all-or-nothing: one malformed device rejects the
//! document.

use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::DeviceData;
use crate::device::Device;
use crate::error::{DeviceError, Result};

/// Text format of an export document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl ExportFormat {
    /// Detect the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|s| s.to_lowercase())
            .as_deref()
        {
            Some("yaml" | "yml") => ExportFormat::Yaml,
            _ => ExportFormat::Json,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Export document holding device entities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceExport {
    pub webauthn_devices: Vec<Device>,
}

/// Export document holding the text-safe device projections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDataExport {
    pub webauthn_devices: Vec<DeviceData>,
}

impl DeviceExport {
    pub fn new(devices: Vec<Device>) -> Self {
        Self {
            webauthn_devices: devices,
        }
    }

    pub fn len(&self) -> usize {
        self.webauthn_devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.webauthn_devices.is_empty()
    }

    /// Convert every device into its exported form, preserving order.
    pub fn to_data(&self) -> DeviceDataExport {
        DeviceDataExport {
            webauthn_devices: self.webauthn_devices.iter().map(Device::to_data).collect(),
        }
    }

    /// Serialize to a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_data())?)
    }

    /// Parse a JSON document, rejecting it entirely if any device is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: DeviceDataExport = serde_json::from_str(json)?;
        Self::try_from(data)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.to_data())?)
    }

    /// Parse a YAML document, rejecting it entirely if any device is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let data: DeviceDataExport = serde_yaml::from_str(yaml)?;
        Self::try_from(data)
    }

    pub fn encode(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Yaml => self.to_yaml(),
        }
    }

    pub fn decode(text: &str, format: ExportFormat) -> Result<Self> {
        match format {
            ExportFormat::Json => Self::from_json(text),
            ExportFormat::Yaml => Self::from_yaml(text),
        }
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &self.to_data())?;
        Ok(())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let data: DeviceDataExport = serde_json::from_reader(reader)?;
        Self::try_from(data)
    }
}

impl TryFrom<DeviceDataExport> for DeviceExport {
    type Error = DeviceError;

    fn try_from(data: DeviceDataExport) -> Result<Self> {
        let total = data.webauthn_devices.len();

        let devices = data
            .webauthn_devices
            .into_iter()
            .enumerate()
            .map(|(index, device)| {
                Device::from_data(device).map_err(|e| {
                    tracing::debug!(index, total, error = %e, "Rejecting device export");
                    e
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(devices = devices.len(), "Decoded device export");
        Ok(Self::new(devices))
    }
}

impl From<&DeviceExport> for DeviceDataExport {
    fn from(export: &DeviceExport) -> Self {
        export.to_data()
    }
}
