//! Common utilities and shared functionality.
//!
//! - Logging setup (`fern` dispatcher with colored levels)
//! - `CustomError` for boot-level failures

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
