/// A signed certificate together with the CA certificate.
pub mod signed_certificate;

/// Signer backed by rcgen and a CA key on disk.
pub mod rcgen_signer;
