/// Errors surfaced to callers of the handler.
pub mod ca_error;

/// Outcome of a certificate request.
pub mod certificate_response;
