//! Implementation blocks for configuration loading/saving.

pub mod configuration;
pub mod configuration_error;
