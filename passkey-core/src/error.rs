use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("Invalid public key encoding: {0}")]
    InvalidPublicKey(base64::DecodeError),

    #[error("Invalid key identifier encoding: {0}")]
    InvalidKid(base64::DecodeError),

    #[error("Key identifier must not be empty")]
    EmptyKid,

    #[error("Invalid AAGUID: {0}")]
    InvalidAaguid(#[from] uuid::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, DeviceError>;
