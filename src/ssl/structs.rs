//! Data structures for the SSL module.

/// Parsed certificate chain and signing key ready for a TLS handshake.
pub mod certificate_bundle;

/// Shared holder of the active identity, consulted on every handshake.
pub mod certificate_cache;

/// Persisted description of the active certificate configuration.
pub mod ssl_settings;

/// The certificate lifecycle manager.
pub mod ssl_service;

/// One-shot notification used to rebuild the hosted listeners.
pub mod restart_signal;

/// Filesystem backed certificate storage.
pub mod ssl_file_service_local;

/// In-process settings store.
pub mod ssl_settings_store_memory;

/// SQLite backed settings store.
pub mod ssl_settings_store_sqlite;
