//! # sslkeeper
//!
//! TLS identity lifecycle manager for a long running server process.
//!
//! ## Overview
//!
//! On every start sslkeeper decides which certificate the server presents:
//! an operator supplied pair, the pair recorded by a previous run, or a newly
//! generated self-signed pair. The parsed identity is kept in memory and
//! handed to rustls through a certificate resolver, so each handshake reads
//! the current pair. Runtime changes made through the administrative API are
//! persisted and followed by a listener restart.
//!
//! ## Modules
//!
//! - [`api`] - Administrative REST API (settings, certificate upload, CA bundle)
//! - [`common`] - Logging setup and shared error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`ssl`] - Identity resolution, certificate cache, mutations and restart signal
//! - [`structs`] - CLI argument parsing

/// Administrative REST API module.
///
/// Exposes the SSL settings, accepts certificate uploads and toggles the
/// plaintext listener.
pub mod api;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validating and generating `config.toml`.
pub mod config;

/// SSL/TLS identity management module.
pub mod ssl;

/// CLI argument parsing.
pub mod structs;
