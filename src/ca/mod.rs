//! Certificate authority request handling.
//!
//! [`CaHandler`](structs::ca_handler::CaHandler) turns a submitted
//! certificate signing request into one of three outcomes: the certificate
//! issued earlier, a freshly signed certificate, or a queued request waiting
//! for an operator. For any single hostname the sequence
//! check issued → pin key → decide → sign or queue runs under a per-hostname
//! lock, while different hostnames are handled in parallel.
//!
//! The hostname state only moves forward: unknown, pending, issued. Once a
//! certificate is issued it is returned unchanged for every later request.
//!
//! # Example
//!
//! ```rust,ignore
//! let handler = CaHandler::from_config(&config)?;
//! match handler.get_cert(&csr_pem, Some(&CallerIdentity::from("10.0.0.7")))? {
//!     CertificateResponse::Issued { certificate, .. } => install(certificate),
//!     CertificateResponse::Pending => retry_later(),
//!     CertificateResponse::NotCa => {}
//! }
//! ```

/// Error and response types.
pub mod enums;

/// Handler and caller identity types.
pub mod structs;

/// Request handling, manual signing and hostname locking.
pub mod impls;
