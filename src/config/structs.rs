//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Certificate authority settings (storage, identity, autosign).
pub mod ca_config;

/// API server configuration (address, SSL, timeouts).
pub mod api_server_config;
