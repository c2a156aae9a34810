/// Directory layout below the SSL directory.
pub mod ssl_layout;

/// One-file-per-hostname directory with atomic publishing.
pub mod file_store;

/// Pinned public keys.
pub mod key_store;

/// Pending certificate signing requests.
pub mod request_store;

/// Issued certificates and the shared CA certificate.
pub mod certificate_store;
