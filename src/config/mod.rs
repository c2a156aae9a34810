//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the certificate
//! authority configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **ca_config**: CA identity, storage directory, certificate lifetime and
//!   the autosign setting
//! - **api_server**: HTTP/HTTPS listeners serving certificate requests
//!
//! # Autosign
//!
//! The `autosign` key accepts either a boolean or an absolute path to a
//! policy file:
//!
//! ```toml
//! [ca_config]
//! autosign = "/etc/fleet-ca/autosign.conf"
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use fleet_ca::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (autosign setting, loading errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
