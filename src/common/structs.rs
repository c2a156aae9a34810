/// Plain message error used by the binary and configuration loading.
pub mod custom_error;
