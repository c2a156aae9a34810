/// Errors raised by the file backed stores.
pub mod storage_error;
