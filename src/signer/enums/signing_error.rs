use thiserror::Error;
use crate::storage::enums::storage_error::StorageError;

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("CA key file not found: {0}")]
    KeyFileNotFound(String),

    #[error("CA certificate file not found: {0}")]
    CertFileNotFound(String),

    #[error("Failed to parse CA key: {0}")]
    KeyParseError(String),

    #[error("Failed to parse CA certificate: {0}")]
    CertParseError(String),

    #[error("Failed to read request: {0}")]
    RequestParseError(String),

    #[error("Failed to sign certificate: {0}")]
    SignError(String),

    #[error("Failed to generate CA: {0}")]
    GenerateError(String),

    #[error("CA storage error: {0}")]
    Storage(#[from] StorageError),
}
