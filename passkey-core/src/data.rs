//! Text-safe projection of a [`Device`] for export and import
//!
//! Binary values are rendered as text: standard base64 for the public key and
//! key identifier, the hyphenated UUID form for the AAGUID (the nil UUID when
//! unset) and an optional RFC 3339 timestamp for the last sign-in.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aaguid::Aaguid;
use crate::device::Device;
use crate::error::{DeviceError, Result};
use crate::kid::Kid;

/// Exported form of a [`Device`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceData {
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub rpid: String,
    pub username: String,
    pub description: String,
    pub kid: String,
    pub public_key: String,
    pub attestation_type: String,
    pub transport: String,
    pub aaguid: String,
    pub sign_count: u32,
    pub clone_warning: bool,
}

impl Device {
    /// Convert this device into its exported form.
    pub fn to_data(&self) -> DeviceData {
        DeviceData {
            created_at: self.created_at,
            last_used_at: self.last_used(),
            rpid: self.rpid.clone(),
            username: self.username.clone(),
            description: self.description.clone(),
            kid: self.kid.to_string(),
            public_key: STANDARD.encode(&self.public_key),
            attestation_type: self.attestation_type.clone(),
            transport: self.transport.clone(),
            aaguid: self.aaguid.to_string(),
            sign_count: self.sign_count,
            clone_warning: self.clone_warning,
        }
    }

    /// Rebuild a device from its exported form.
    ///
    /// Fails on the first field that does not decode; the nil AAGUID decodes to
    /// an unset AAGUID. The surrogate id is not part of the export.
    pub fn from_data(data: DeviceData) -> Result<Self> {
        let public_key = STANDARD
            .decode(&data.public_key)
            .map_err(DeviceError::InvalidPublicKey)?;

        let aaguid: Aaguid = data.aaguid.parse()?;

        let kid: Kid = data.kid.parse()?;
        if kid.is_empty() {
            return Err(DeviceError::EmptyKid);
        }

        Ok(Self {
            id: None,
            created_at: data.created_at,
            last_used_at: data.last_used_at,
            rpid: data.rpid,
            username: data.username,
            description: data.description,
            kid,
            public_key,
            attestation_type: data.attestation_type,
            transport: data.transport,
            aaguid,
            sign_count: data.sign_count,
            clone_warning: data.clone_warning,
        })
    }
}

impl From<Device> for DeviceData {
    fn from(device: Device) -> Self {
        device.to_data()
    }
}

impl TryFrom<DeviceData> for Device {
    type Error = DeviceError;

    fn try_from(data: DeviceData) -> Result<Self> {
        Device::from_data(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn device() -> Device {
        Device {
            id: None,
            created_at: Utc.with_ymd_and_hms(2023, 11, 20, 9, 15, 0).unwrap(),
            last_used_at: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            rpid: "example.com".to_string(),
            username: "john".to_string(),
            description: "Primary".to_string(),
            kid: Kid::new(b"credential-1".to_vec()),
            public_key: vec![0xa5, 0x01, 0x02, 0x03, 0x26],
            attestation_type: "packed".to_string(),
            transport: "usb,nfc".to_string(),
            aaguid: "ee882879-721c-4913-9775-3dfcce97072a".parse().unwrap(),
            sign_count: 42,
            clone_warning: true,
        }
    }

    #[test]
    fn test_to_data_renders_text_fields() {
        let data = device().to_data();

        assert_eq!(data.kid, "Y3JlZGVudGlhbC0x");
        assert_eq!(data.public_key, "pQECAyY=");
        assert_eq!(data.aaguid, "ee882879-721c-4913-9775-3dfcce97072a");
        assert_eq!(data.transport, "usb,nfc");
        assert!(data.last_used_at.is_some());
    }

    #[test]
    fn test_unset_aaguid_renders_nil() {
        let data = Device {
            aaguid: Aaguid::UNSET,
            ..device()
        }
        .to_data();
        assert_eq!(data.aaguid, "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn test_from_data_restores_device() {
        let original = device();
        assert_eq!(Device::from_data(original.to_data()).unwrap(), original);

        let never_used = Device {
            last_used_at: None,
            aaguid: Aaguid::UNSET,
            transport: String::new(),
            ..device()
        };
        assert_eq!(Device::from_data(never_used.to_data()).unwrap(), never_used);
    }

    #[test]
    fn test_nil_aaguid_device_round_trips_as_unset() {
        let nil = Device {
            aaguid: Aaguid::from(Some(Uuid::nil())),
            ..device()
        };
        let unset = Device {
            aaguid: Aaguid::UNSET,
            ..device()
        };

        let restored = Device::from_data(nil.to_data()).unwrap();
        assert_eq!(restored, nil);
        assert_eq!(restored, unset);
        assert!(!restored.aaguid.is_set());
    }

    #[test]
    fn test_nil_aaguid_decodes_to_unset() {
        let mut data = device().to_data();
        data.aaguid = Uuid::nil().to_string();

        let decoded = Device::from_data(data).unwrap();
        assert_eq!(decoded.aaguid, Aaguid::UNSET);
    }

    #[test]
    fn test_invalid_public_key_fails() {
        let mut data = device().to_data();
        data.public_key = "not base64!".to_string();

        let err = Device::from_data(data).unwrap_err();
        assert!(matches!(err, DeviceError::InvalidPublicKey(_)));
    }

    #[test]
    fn test_invalid_kid_fails() {
        let mut data = device().to_data();
        data.kid = "%%%".to_string();

        let err = Device::from_data(data).unwrap_err();
        assert!(matches!(err, DeviceError::InvalidKid(_)));
    }

    #[test]
    fn test_empty_kid_fails() {
        let mut data = device().to_data();
        data.kid = String::new();

        let err = Device::from_data(data).unwrap_err();
        assert!(matches!(err, DeviceError::EmptyKid));
    }

    #[test]
    fn test_invalid_aaguid_fails() {
        let mut data = device().to_data();
        data.aaguid = "not-a-uuid".to_string();

        let err = Device::from_data(data).unwrap_err();
        assert!(matches!(err, DeviceError::InvalidAaguid(_)));
    }

    #[test]
    fn test_device_serializes_as_data() {
        let original = device();
        let json = serde_json::to_value(&original).unwrap();

        assert_eq!(json["public_key"], "pQECAyY=");
        assert_eq!(json["last_used_at"], "2024-01-02T03:04:05Z");
        assert!(json.get("id").is_none());

        let restored: Device = serde_json::from_value(json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_missing_last_used_is_null() {
        let json = serde_json::to_value(Device {
            last_used_at: None,
            ..device()
        })
        .unwrap();
        assert!(json["last_used_at"].is_null());
    }
}
