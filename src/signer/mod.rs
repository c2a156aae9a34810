//! Certificate signing.
//!
//! [`Signer`](traits::signer::Signer) is the seam between the request
//! handler and the cryptography. The production implementation,
//! [`RcgenSigner`](structs::rcgen_signer::RcgenSigner), signs with a CA key
//! kept under `<ssl_dir>/ca/` and can bootstrap that CA on first start.

/// Signing errors.
pub mod enums;

/// Signer implementations and their outputs.
pub mod structs;

/// Signing and CA bootstrap.
pub mod impls;

/// The signer seam.
pub mod traits;
