//! Relying Party configuration
//!
//! Holds the Relying Party (RP) identity the sign-in updater scopes devices to.
//! Callers hand the same values to their ceremony engine.

use url::Url;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid origin URL: {0}")]
    InvalidOrigin(String),
}

/// Relying Party identity, read-only once constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelyingPartyConfig {
    rp_id: String,
    rp_origin: Url,
    rp_name: String,
}

impl RelyingPartyConfig {
    /// Create a new Relying Party configuration
    ///
    /// # Arguments
    ///
    /// * `rp_id` - Relying Party ID (typically the domain name)
    /// * `rp_origin` - Relying Party origin URL
    /// * `rp_name` - Human-readable name for the Relying Party
    pub fn new(rp_id: impl Into<String>, rp_origin: Url, rp_name: impl Into<String>) -> Self {
        Self {
            rp_id: rp_id.into(),
            rp_origin,
            rp_name: rp_name.into(),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `WEBAUTHN_RP_ID` - Relying Party ID (default: "localhost")
    /// - `WEBAUTHN_RP_ORIGIN` - RP origin URL (default: "http://localhost:3001")
    /// - `WEBAUTHN_RP_NAME` - RP display name (default: "Passkey")
    pub fn from_env() -> Result<Self, ConfigError> {
        let rp_id = std::env::var("WEBAUTHN_RP_ID").unwrap_or_else(|_| "localhost".to_string());
        let rp_origin = std::env::var("WEBAUTHN_RP_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3001".to_string());
        let rp_name = std::env::var("WEBAUTHN_RP_NAME").unwrap_or_else(|_| "Passkey".to_string());

        let origin =
            Url::parse(&rp_origin).map_err(|e| ConfigError::InvalidOrigin(format!("{}", e)))?;

        Ok(Self::new(rp_id, origin, rp_name))
    }

    /// Canonical Relying Party ID
    pub fn rp_id(&self) -> &str {
        &self.rp_id
    }

    /// Relying Party display name
    pub fn rp_name(&self) -> &str {
        &self.rp_name
    }

    /// Origin URL as configured
    pub fn rp_origin(&self) -> &Url {
        &self.rp_origin
    }

    /// Origin in its serialized form, e.g. `https://login.example.com`.
    ///
    /// Legacy U2F credentials are scoped to this value instead of the RP id.
    pub fn origin(&self) -> String {
        self.rp_origin.origin().ascii_serialization()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_has_no_trailing_slash() {
        let origin = Url::parse("https://login.example.com/").unwrap();
        let config = RelyingPartyConfig::new("example.com", origin, "Example");
        assert_eq!(config.origin(), "https://login.example.com");
        assert_eq!(config.rp_id(), "example.com");
    }

    #[test]
    fn test_origin_keeps_explicit_port() {
        let origin = Url::parse("http://localhost:3001").unwrap();
        let config = RelyingPartyConfig::new("localhost", origin, "Test");
        assert_eq!(config.origin(), "http://localhost:3001");
    }

    #[test]
    fn test_config_from_env_defaults() {
        std::env::remove_var("WEBAUTHN_RP_ID");
        std::env::remove_var("WEBAUTHN_RP_ORIGIN");
        std::env::remove_var("WEBAUTHN_RP_NAME");

        let config = RelyingPartyConfig::from_env().unwrap();
        assert_eq!(config.rp_id(), "localhost");
        assert_eq!(config.rp_name(), "Passkey");
        assert_eq!(config.origin(), "http://localhost:3001");
    }
}
