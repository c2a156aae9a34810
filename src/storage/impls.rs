/// SslLayout implementation: paths of every store and CA file.
pub mod ssl_layout;

/// FileStore implementation: read, publish, create-if-absent, list, remove.
pub mod file_store;

/// KeyStore implementation: key pinning.
pub mod key_store;

/// RequestStore implementation: first-write-wins pending requests.
pub mod request_store;

/// CertificateStore implementation.
pub mod certificate_store;
