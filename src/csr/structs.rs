/// Immutable parsed certificate signing request.
pub mod certificate_signing_request;
