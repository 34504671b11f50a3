//! API request/response structures.

/// Shared data context for request handlers.
pub mod api_service_data;

/// `?token=` query parameter.
pub mod query_token;

/// Request body of `PUT /api/ssl`.
pub mod api_ssl;
