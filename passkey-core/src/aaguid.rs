//! Authenticator model identifier

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::DeviceError;

/// AAGUID of an authenticator model, or unset.
///
/// Never holds the nil UUID: an all-zero value is stored as unset, so the two
/// cannot be told apart by equality, encoding or the ceremony view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Aaguid(Option<Uuid>);

impl Aaguid {
    pub const UNSET: Self = Self(None);

    pub fn new(uuid: Uuid) -> Self {
        Self((!uuid.is_nil()).then_some(uuid))
    }

    /// Parse raw bytes from an authenticator. Malformed input is unset.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Uuid::from_slice(bytes).map(Self::new).unwrap_or_default()
    }

    pub fn get(&self) -> Option<Uuid> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Binary form handed to the ceremony engine: 16 bytes, or none when unset.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0
            .map(|uuid| uuid.as_bytes().to_vec())
            .unwrap_or_default()
    }
}

impl From<Uuid> for Aaguid {
    fn from(uuid: Uuid) -> Self {
        Self::new(uuid)
    }
}

impl From<Option<Uuid>> for Aaguid {
    fn from(uuid: Option<Uuid>) -> Self {
        uuid.map(Self::new).unwrap_or_default()
    }
}

impl From<Aaguid> for Option<Uuid> {
    fn from(aaguid: Aaguid) -> Self {
        aaguid.0
    }
}

/// Hyphenated form; the nil UUID string when unset.
impl fmt::Display for Aaguid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.unwrap_or_else(Uuid::nil), f)
    }
}

impl FromStr for Aaguid {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = "ee882879-721c-4913-9775-3dfcce97072a";

    #[test]
    fn test_nil_uuid_is_unset() {
        let nil = Aaguid::new(Uuid::nil());
        assert_eq!(nil, Aaguid::UNSET);
        assert!(!nil.is_set());
        assert_eq!(nil.get(), None);
        assert_eq!(Aaguid::from(Some(Uuid::nil())), Aaguid::default());
    }

    #[test]
    fn test_from_bytes() {
        let model = Uuid::parse_str(MODEL).unwrap();
        assert_eq!(Aaguid::from_bytes(model.as_bytes()).get(), Some(model));
        assert_eq!(Aaguid::from_bytes(&[0; 16]), Aaguid::UNSET);
        assert_eq!(Aaguid::from_bytes(&[0xff; 3]), Aaguid::UNSET);
        assert_eq!(Aaguid::from_bytes(&[]), Aaguid::UNSET);
    }

    #[test]
    fn test_unset_has_no_binary_form() {
        assert!(Aaguid::UNSET.to_bytes().is_empty());

        let model = Uuid::parse_str(MODEL).unwrap();
        assert_eq!(Aaguid::new(model).to_bytes(), model.as_bytes().to_vec());
    }

    #[test]
    fn test_text_form() {
        let aaguid: Aaguid = MODEL.parse().unwrap();
        assert_eq!(aaguid.to_string(), MODEL);

        assert_eq!(
            Aaguid::UNSET.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            "00000000-0000-0000-0000-000000000000"
                .parse::<Aaguid>()
                .unwrap(),
            Aaguid::UNSET
        );
    }

    #[test]
    fn test_malformed_text_fails() {
        let err = "zzzz".parse::<Aaguid>().unwrap_err();
        assert!(matches!(err, DeviceError::InvalidAaguid(_)));
    }
}
