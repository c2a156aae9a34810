//! # fleet-ca
//!
//! Certificate authority request handling for hosts enrolling into a
//! managed fleet.
//!
//! ## Overview
//!
//! Hosts submit a certificate signing request carrying their hostname in the
//! subject common name. The handler either returns the certificate issued
//! earlier, signs the request right away when the autosign policy allows the
//! hostname, or queues it until an operator signs it. The first public key
//! seen for a hostname is pinned; a request with any other key is refused.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fleet_ca::ca::structs::ca_handler::CaHandler;
//! use fleet_ca::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let handler = CaHandler::from_config(&config)?;
//! let response = handler.get_cert(&csr_pem, None)?;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - HTTP transport for certificate requests and statistics
//! - [`ca`] - The request handler and its companion signing operations
//! - [`common`] - Shared utilities and error handling
//! - [`config`] - Configuration management and TOML parsing
//! - [`csr`] - Certificate signing request parsing
//! - [`policy`] - Autosign policy and allow-list matching
//! - [`signer`] - Signing seam and the rcgen backed CA
//! - [`stats`] - Request outcome counters
//! - [`storage`] - Pinned keys, pending requests and issued certificates on disk
//! - [`structs`] - CLI argument parsing

/// HTTP transport.
///
/// Exposes certificate submission, CA certificate download and statistics
/// over actix-web, optionally behind TLS.
pub mod api;

/// Certificate request handling.
pub mod ca;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Loads, creates and validates the TOML configuration file.
pub mod config;

/// Certificate signing request parsing.
pub mod csr;

/// Logging setup.
pub mod logging;

/// Autosign policy.
pub mod policy;

/// Certificate signing.
pub mod signer;

/// Statistics tracking.
pub mod stats;

/// Durable stores below the SSL directory.
pub mod storage;

/// CLI argument parsing.
pub mod structs;
