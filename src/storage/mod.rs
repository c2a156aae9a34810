//! Durable per-hostname stores under the CA's SSL directory.
//!
//! Every store keeps one file per hostname and publishes writes by writing
//! a temporary file in the target directory and renaming it into place, so
//! a crash never leaves a half written entry behind. Entries that must never
//! be replaced (pinned keys, pending requests) are published with a
//! no-clobber rename, which also settles races between concurrent writers.

/// Storage error type.
pub mod enums;

/// Store types and the on-disk layout.
pub mod structs;

/// Store operations.
pub mod impls;

/// Unit tests for the stores.
pub mod tests;
