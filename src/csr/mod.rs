//! Certificate signing request intake.
//!
//! Turns the raw bytes handed over by a transport into an immutable
//! [`CertificateSigningRequest`](structs::certificate_signing_request::CertificateSigningRequest):
//! the hostname taken from the subject common name and the DER encoded
//! public key used for pinning. Parsing performs no I/O and makes no trust
//! decision; the self-signature of the request is verified so a request can
//! only pin a key its sender actually holds.

/// Parsed certificate signing request.
pub mod structs;

/// Parsing, hostname validation and PEM helpers.
pub mod impls;

/// Unit tests for request parsing.
pub mod tests;
