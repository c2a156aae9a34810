/// CaHandler construction.
pub mod ca_handler;

/// `get_cert`, the request entry point.
pub mod ca_handler_get_cert;

/// Operator driven listing and signing of pending requests.
pub mod ca_handler_manual;

/// Per-hostname mutual exclusion.
pub mod ca_handler_locks;

/// CertificateResponse implementation.
pub mod certificate_response;

/// CallerIdentity implementation.
pub mod caller_identity;
