use crate::ssl::structs::certificate_bundle::CertificateBundle;
use parking_lot::RwLock;
use std::sync::Arc;

/// Holds at most one identity. Replacing it swaps a single `Arc`, so readers
/// see either the previous pair or the new one, never a mix.
pub struct CertificateCache {
    pub(crate) bundle: RwLock<Option<Arc<CertificateBundle>>>,
}
