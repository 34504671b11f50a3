//! Implementation blocks for the SSL module.

pub mod certificate_bundle;
pub mod certificate_cache;
pub mod certificate_error;
pub mod restart_signal;
pub mod ssl_file_service_local;
pub mod ssl_service;
pub mod ssl_service_cert_gen;
pub mod ssl_service_mutations;
pub mod ssl_settings;
pub mod ssl_settings_store_memory;
pub mod ssl_settings_store_sqlite;
