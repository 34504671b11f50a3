//! Configuration management module.
//!
//! Loads and validates `config.toml`, and writes a default file on request.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **ssl**: host for self-signed generation, supplied certificate paths,
//!   managed storage directory and settings database
//! - **api_server**: HTTPS and plaintext bind addresses, API key, timeouts
//!
//! # Example
//!
//! ```rust,ignore
//! use sslkeeper::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
