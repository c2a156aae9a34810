//! Configuration enumerations.

/// Boolean-or-path value of the `autosign` key.
pub mod autosign_setting;

/// Errors raised while reading or parsing the configuration file.
pub mod configuration_error;
