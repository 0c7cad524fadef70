//! Stored WebAuthn device
//!
//! A [`Device`] is the storage-shaped record of one registered authenticator
//! credential. It is created once from a completed registration and updated on
//! every successful sign-in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::aaguid::Aaguid;
use crate::ceremony::{Authenticator, AuthenticatorTransport, Credential};
use crate::config::RelyingPartyConfig;
use crate::data::DeviceData;
use crate::error::{DeviceError, Result};
use crate::kid::Kid;

/// Attestation type of U2F devices migrated into the WebAuthn flow.
pub const ATTESTATION_TYPE_FIDO_U2F: &str = "fido-u2f";

/// Separator of the stored transport string.
pub const TRANSPORT_DELIMITER: &str = ",";

/// WebAuthn device as stored by the persistence layer.
///
/// Serializes through its [`DeviceData`] projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DeviceData", try_from = "DeviceData")]
pub struct Device {
    /// Surrogate row id, `None` until the row is persisted
    pub id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    /// Relying Party the credential is scoped to; empty until the first sign-in
    /// for migrated devices
    pub rpid: String,
    pub username: String,
    pub description: String,
    pub kid: Kid,
    pub public_key: Vec<u8>,
    pub attestation_type: String,
    /// Comma separated transport hints
    pub transport: String,
    /// Authenticator model
    pub aaguid: Aaguid,
    pub sign_count: u32,
    pub clone_warning: bool,
}

impl Device {
    /// Column names of the persisted row, in declaration order.
    pub const COLUMNS: [&'static str; 13] = [
        "id",
        "created_at",
        "last_used_at",
        "rpid",
        "username",
        "description",
        "kid",
        "public_key",
        "attestation_type",
        "transport",
        "aaguid",
        "sign_count",
        "clone_warning",
    ];

    /// Build a device from a credential produced by a completed registration.
    pub fn from_credential(
        rpid: impl Into<String>,
        username: impl Into<String>,
        description: impl Into<String>,
        credential: &Credential,
    ) -> Self {
        Self {
            id: None,
            created_at: Utc::now(),
            last_used_at: None,
            rpid: rpid.into(),
            username: username.into(),
            description: description.into(),
            kid: Kid::new(credential.id.clone()),
            public_key: credential.public_key.clone(),
            attestation_type: credential.attestation_type.clone(),
            transport: join_transports(&credential.transport),
            aaguid: Aaguid::from_bytes(&credential.authenticator.aaguid),
            sign_count: credential.authenticator.sign_count,
            clone_warning: credential.authenticator.clone_warning,
        }
    }

    /// Record a successful sign-in.
    ///
    /// The counter is stored as reported. `rpid` is only assigned when it is
    /// still empty: migrated U2F devices are scoped to the origin, everything
    /// else to the RP id.
    pub fn update_sign_in_info(
        &mut self,
        config: &RelyingPartyConfig,
        now: DateTime<Utc>,
        sign_count: u32,
    ) {
        self.last_used_at = Some(now);
        self.sign_count = sign_count;

        if !self.rpid.is_empty() {
            return;
        }

        self.rpid = match self.attestation_type.as_str() {
            ATTESTATION_TYPE_FIDO_U2F => config.origin(),
            _ => config.rp_id().to_string(),
        };

        tracing::info!(
            username = %self.username,
            kid = %self.kid,
            rpid = %self.rpid,
            "Assigned RPID on first sign-in"
        );
    }

    pub fn last_used(&self) -> Option<DateTime<Utc>> {
        self.last_used_at
    }

    pub fn is_fido_u2f(&self) -> bool {
        self.attestation_type == ATTESTATION_TYPE_FIDO_U2F
    }

    /// Decoded transport hints, without empty tokens.
    pub fn transports(&self) -> Vec<AuthenticatorTransport> {
        self.transport
            .split(TRANSPORT_DELIMITER)
            .filter(|token| !token.is_empty())
            .map(AuthenticatorTransport::from)
            .collect()
    }

    /// Credential in the shape the ceremony engine expects.
    pub fn to_credential(&self) -> Result<Credential> {
        if self.kid.is_empty() {
            return Err(DeviceError::EmptyKid);
        }

        Ok(Credential {
            id: self.kid.as_bytes().to_vec(),
            public_key: self.public_key.clone(),
            attestation_type: self.attestation_type.clone(),
            transport: self.transports(),
            authenticator: Authenticator {
                aaguid: self.aaguid.to_bytes(),
                sign_count: self.sign_count,
                clone_warning: self.clone_warning,
            },
        })
    }
}

fn join_transports(transports: &[AuthenticatorTransport]) -> String {
    transports
        .iter()
        .map(AuthenticatorTransport::as_str)
        .collect::<Vec<_>>()
        .join(TRANSPORT_DELIMITER)
}
