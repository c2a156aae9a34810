//! HTTP transport for the certificate request handler.
//!
//! # Endpoints
//!
//! - `POST /certificate` - Submit a certificate signing request (PEM or DER body)
//! - `GET /certificate/ca` - Download the CA certificate
//! - `GET /stats` - Request handling statistics in JSON format
//!
//! The caller identity handed to the request handler is the client IP
//! address, taken from the configured real-IP header when present. HTTP
//! callers therefore never count as self-requests.
//!
//! # Authentication
//!
//! Only `/stats` requires a token, passed as a query parameter:
//! `?token=<api_key>`

/// Data structures for API service context.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Certificate request endpoints.
pub mod api_certificate;

/// Statistics endpoint.
pub mod api_stats;
