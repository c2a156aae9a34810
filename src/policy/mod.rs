//! Autosign policy.
//!
//! Decides whether a hostname may be signed without an operator. The
//! configured mode is either a fixed answer or a path to an allow-list file
//! that is re-read on every evaluation, so edits take effect immediately.
//! A missing allow-list denies everything and is reported once.

/// Autosign modes and allow-list patterns.
pub mod enums;

/// Policy and matcher types.
pub mod structs;

/// Pattern parsing, matching and policy evaluation.
pub mod impls;
