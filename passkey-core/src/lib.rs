//! Passkey Core - WebAuthn device records for ceremony engines
//!
//! This crate translates between stored authenticator records and the shapes a
//! WebAuthn/FIDO2 ceremony engine works with.
//!
//! # Features
//!
//! - [`WebAuthnUser`] exposes a user and their devices as a [`RelyingPartyUser`]
//! - [`Device::from_credential`] builds a record from a completed registration
//! - [`Device::update_sign_in_info`] records a sign-in, assigning the RPID of
//!   migrated U2F devices on first use
//! - [`DeviceExport`] reads and writes backup documents as JSON or YAML
//!
//! # Example
//!
//! ```no_run
//! use passkey_core::{Device, DeviceExport, RelyingPartyConfig, RelyingPartyUser, WebAuthnUser};
//!
//! # fn example(devices: Vec<Device>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = RelyingPartyConfig::from_env()?;
//!
//! let user = WebAuthnUser::new("john", "John Smith", devices);
//! let allow_list = user.webauthn_credential_descriptors();
//!
//! // After the ceremony engine accepted an assertion for the first device
//! let mut device = user.devices[0].clone();
//! device.update_sign_in_info(&config, chrono::Utc::now(), 12);
//!
//! let backup = DeviceExport::new(vec![device]).to_json()?;
//! let restored = DeviceExport::from_json(&backup)?;
//! # Ok(())
//! # }
//! ```

pub mod aaguid;
pub mod ceremony;
pub mod config;
pub mod data;
pub mod device;
pub mod error;
pub mod export;
pub mod kid;
pub mod user;

// Re-export main types for convenience
pub use aaguid::Aaguid;
pub use ceremony::{
    Authenticator, AuthenticatorTransport, Credential, CredentialDescriptor, RelyingPartyUser,
};
pub use config::{ConfigError, RelyingPartyConfig};
pub use data::DeviceData;
pub use device::{Device, ATTESTATION_TYPE_FIDO_U2F, TRANSPORT_DELIMITER};
pub use error::{DeviceError, Result};
pub use export::{DeviceDataExport, DeviceExport, ExportFormat};
pub use kid::Kid;
pub use user::WebAuthnUser;
