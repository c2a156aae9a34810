//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! the other modules of the certificate authority.
//!
//! # Utilities
//!
//! - Public key fingerprints for log output and error reports
//! - Bind address checks before starting listeners
//! - Timestamp helpers
//!
//! # Data Structures
//!
//! - `CustomError` - Binary-level error with a plain message

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
