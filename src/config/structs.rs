//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Certificate sources and storage locations (`[ssl]`).
pub mod ssl_config;

/// Hosted API listener settings (`[api_server]`).
pub mod api_server_config;
