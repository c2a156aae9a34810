/// Statistics operations on the request handler.
pub mod ca_handler;
