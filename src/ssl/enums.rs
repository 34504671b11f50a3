//! Enumerations for the SSL module.

/// Error taxonomy for certificate operations.
pub mod certificate_error;

/// Outcome of checking the certificate pair named by the stored settings.
pub mod certificate_lookup;
