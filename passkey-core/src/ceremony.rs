//! Credential shapes consumed by the ceremony engine
//!
//! The ceremony engine builds registration and authentication options from a
//! [`RelyingPartyUser`] and verifies responses against its [`Credential`]s.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Credential type advertised in allow/exclude lists.
pub const PUBLIC_KEY_CREDENTIAL_TYPE: &str = "public-key";

/// Hint describing how an authenticator may be reached.
///
/// Unrecognised tokens are kept as [`AuthenticatorTransport::Other`] so a
/// stored transport string always survives translation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum AuthenticatorTransport {
    Usb,
    Nfc,
    Ble,
    Internal,
    Hybrid,
    Other(String),
}

impl AuthenticatorTransport {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Usb => "usb",
            Self::Nfc => "nfc",
            Self::Ble => "ble",
            Self::Internal => "internal",
            Self::Hybrid => "hybrid",
            Self::Other(token) => token,
        }
    }
}

impl From<&str> for AuthenticatorTransport {
    fn from(token: &str) -> Self {
        match token {
            "usb" => Self::Usb,
            "nfc" => Self::Nfc,
            "ble" => Self::Ble,
            "internal" => Self::Internal,
            "hybrid" => Self::Hybrid,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for AuthenticatorTransport {
    fn from(token: String) -> Self {
        Self::from(token.as_str())
    }
}

impl From<AuthenticatorTransport> for String {
    fn from(transport: AuthenticatorTransport) -> Self {
        transport.as_str().to_string()
    }
}

impl FromStr for AuthenticatorTransport {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for AuthenticatorTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticator state tracked alongside a credential
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authenticator {
    /// Raw AAGUID bytes (16 bytes, empty when the model is unknown)
    pub aaguid: Vec<u8>,
    /// Signature counter reported by the authenticator
    pub sign_count: u32,
    /// Set by the ceremony engine when the counter appears to have regressed
    pub clone_warning: bool,
}

/// A credential as understood by the ceremony engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Raw credential id
    pub id: Vec<u8>,
    /// COSE-encoded public key
    pub public_key: Vec<u8>,
    /// Attestation type the credential was registered under
    pub attestation_type: String,
    pub transport: Vec<AuthenticatorTransport>,
    pub authenticator: Authenticator,
}

impl Credential {
    /// Reduced shape used for allow/exclude lists
    pub fn descriptor(&self) -> CredentialDescriptor {
        CredentialDescriptor {
            type_: PUBLIC_KEY_CREDENTIAL_TYPE.to_string(),
            id: self.id.clone(),
            transports: self.transport.clone(),
        }
    }
}

/// Credential id plus transport hints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialDescriptor {
    #[serde(rename = "type")]
    pub type_: String,
    pub id: Vec<u8>,
    pub transports: Vec<AuthenticatorTransport>,
}

/// Identity the ceremony engine runs registration and authentication for.
///
/// Any identity source can satisfy this; [`crate::WebAuthnUser`] is the
/// implementation backed by stored devices.
pub trait RelyingPartyUser {
    /// Stable user handle
    fn webauthn_id(&self) -> Vec<u8>;

    /// Account name
    fn webauthn_name(&self) -> &str;

    fn webauthn_display_name(&self) -> &str;

    /// Icon URL; icons are not supported so the default is empty.
    fn webauthn_icon(&self) -> &str {
        ""
    }

    /// All credentials registered to this user
    fn webauthn_credentials(&self) -> Vec<Credential>;

    /// Descriptors for every credential, in the same order
    fn webauthn_credential_descriptors(&self) -> Vec<CredentialDescriptor> {
        self.webauthn_credentials()
            .iter()
            .map(Credential::descriptor)
            .collect()
    }
}
