/// Errors raised while loading the CA or signing a request.
pub mod signing_error;
