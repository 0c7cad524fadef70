//! Credential key identifier

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::DeviceError;

/// Binary credential id whose canonical text form is standard base64.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Kid(Vec<u8>);

impl Kid {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for Kid {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Kid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Kid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&STANDARD.encode(&self.0))
    }
}

impl FromStr for Kid {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STANDARD
            .decode(s)
            .map(Self)
            .map_err(DeviceError::InvalidKid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kid_text_form_is_standard_base64() {
        let kid = Kid::new(vec![0xfb, 0xff, 0x00, 0x10]);
        assert_eq!(kid.to_string(), "+/8AEA==");
        assert_eq!("+/8AEA==".parse::<Kid>().unwrap(), kid);
    }

    #[test]
    fn test_kid_rejects_url_safe_alphabet() {
        let err = "-_8AEA==".parse::<Kid>().unwrap_err();
        assert!(matches!(err, DeviceError::InvalidKid(_)));
    }
}
