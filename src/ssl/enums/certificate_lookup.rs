use crate::ssl::structs::certificate_bundle::CertificateBundle;

/// Result of loading the pair recorded in the settings.
///
/// Only a missing file maps to `Absent`; unreadable or corrupt material is
/// reported as an error by the lookup itself.
#[derive(Debug)]
pub enum CertificateLookup {
    Loaded(CertificateBundle),
    Absent,
}
