//! SSL/TLS identity management.
//!
//! This module decides which certificate the server presents, keeps the
//! parsed identity in memory for the TLS listener, and propagates runtime
//! certificate changes by signalling a listener restart.
//!
//! # Startup
//!
//! [`SslService::init`](structs::ssl_service::SslService) picks the identity
//! source once per process, in this order:
//! - certificate and key paths supplied by the operator
//! - the pair recorded in the stored settings, when its files still exist
//! - a freshly generated self-signed pair for the configured host
//!
//! # Runtime changes
//!
//! `set_certificates` and `set_http_enabled` update the stored settings,
//! refresh the cache and fire the restart hook given at construction.
//!
//! # Example
//!
//! ```rust,ignore
//! use sslkeeper::ssl::structs::restart_signal::RestartSignal;
//! use sslkeeper::ssl::structs::ssl_service::SslService;
//!
//! let restart = Arc::new(RestartSignal::new());
//! let service = SslService::new(file_service, settings_store, restart.hook());
//! service.init("10.0.0.5", "", "", "").await?;
//! let tls_config = create_server_config_with_resolver(service.certificate_cache())?;
//! ```

/// Error and lookup enumerations.
pub mod enums;

/// Implementation blocks for SSL structs.
pub mod impls;

/// SSL data structures (settings, cache, service, storage backends).
pub mod structs;

/// Collaborator traits for file storage and settings persistence.
pub mod traits;

/// Helpers wiring the certificate cache into rustls.
#[allow(clippy::module_inception)]
pub mod ssl;

/// Unit tests for the SSL service failure paths.
pub mod tests;
