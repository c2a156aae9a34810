use thiserror::Error;
use crate::signer::enums::signing_error::SigningError;
use crate::storage::enums::storage_error::StorageError;

#[derive(Error, Debug)]
pub enum CaError {
    #[error("Malformed certificate request: {0}")]
    MalformedRequest(String),

    #[error("Certificate request has no hostname in its subject common name")]
    MissingHostname,

    #[error("Public keys for {hostname} differ (pinned {pinned}, offered {offered})")]
    KeyMismatch {
        hostname: String,
        pinned: String,
        offered: String,
    },

    #[error("Invalid autosign value: {0}")]
    PolicyFile(String),

    #[error("Signing error: {0}")]
    Signing(#[from] SigningError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("This server is not a certificate authority")]
    NotCa,

    #[error("No pending certificate request for {0}")]
    NoPendingRequest(String),
}

impl CaError {
    /// Stable identifier reported to transport callers.
    pub fn kind(&self) -> &'static str {
        match self {
            CaError::MalformedRequest(_) => "malformed_request",
            CaError::MissingHostname => "missing_hostname",
            CaError::KeyMismatch { .. } => "key_mismatch",
            CaError::PolicyFile(_) => "policy_file_error",
            CaError::Signing(_) => "signing_error",
            CaError::Storage(_) => "storage_error",
            CaError::NotCa => "not_ca",
            CaError::NoPendingRequest(_) => "no_pending_request",
        }
    }

    /// Errors caused by the request itself rather than by the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CaError::MalformedRequest(_)
                | CaError::MissingHostname
                | CaError::KeyMismatch { .. }
                | CaError::NoPendingRequest(_)
        )
    }
}
