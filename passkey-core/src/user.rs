//! Ceremony view of a user and their stored devices

use crate::ceremony::{Credential, RelyingPartyUser};
use crate::device::Device;

/// A user as presented to the ceremony engine.
///
/// Built per ceremony from the username, display name and the devices loaded
/// from storage; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebAuthnUser {
    pub username: String,
    pub display_name: String,
    pub devices: Vec<Device>,
}

impl WebAuthnUser {
    pub fn new(
        username: impl Into<String>,
        display_name: impl Into<String>,
        devices: Vec<Device>,
    ) -> Self {
        Self {
            username: username.into(),
            display_name: display_name.into(),
            devices,
        }
    }

    /// True if any device was registered as a legacy FIDO U2F device.
    pub fn has_fido_u2f(&self) -> bool {
        self.devices.iter().any(Device::is_fido_u2f)
    }
}

impl RelyingPartyUser for WebAuthnUser {
    fn webauthn_id(&self) -> Vec<u8> {
        self.username.as_bytes().to_vec()
    }

    fn webauthn_name(&self) -> &str {
        &self.username
    }

    fn webauthn_display_name(&self) -> &str {
        &self.display_name
    }

    fn webauthn_credentials(&self) -> Vec<Credential> {
        self.devices
            .iter()
            .filter_map(|device| match device.to_credential() {
                Ok(credential) => Some(credential),
                Err(e) => {
                    tracing::warn!(
                        username = %self.username,
                        kid = %device.kid,
                        error = %e,
                        "Skipping device that cannot be used as a credential"
                    );
                    None
                }
            })
            .collect()
    }
}
