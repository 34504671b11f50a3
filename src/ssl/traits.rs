//! Collaborator interfaces consumed by the SSL service.

/// Managed storage for certificate files.
pub mod ssl_file_service;

/// Persistence of the SSL settings record.
pub mod ssl_settings_store;
