//! Administrative REST API.
//!
//! # Endpoints
//!
//! - `GET /api/ssl` - Current SSL settings record
//! - `PUT /api/ssl` - Upload a certificate pair and/or toggle the plaintext listener
//! - `GET /api/ssl/ca` - Configured CA bundle as PEM (empty when none)
//!
//! Every endpoint requires `?token=<api_key>`.

/// Server construction, routing and token checks.
#[allow(clippy::module_inception)]
pub mod api;

/// SSL endpoints.
pub mod api_ssl;

/// API request/response structures.
pub mod structs;
