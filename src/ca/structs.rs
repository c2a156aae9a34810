/// The request handler.
pub mod ca_handler;

/// Who submitted a request, as seen by the transport.
pub mod caller_identity;
