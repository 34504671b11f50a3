use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::certificate_cache::CertificateCache;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for CertificateCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateCache")
            .field("bundle", &self.bundle.read().as_deref())
            .finish()
    }
}

impl Default for CertificateCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateCache {
    pub fn new() -> Self {
        Self {
            bundle: parking_lot::RwLock::new(None),
        }
    }

    pub fn publish(&self, bundle: CertificateBundle) {
        let bundle = Arc::new(bundle);
        log::info!(
            "[CERTIFICATE] Refreshed certificate cache from {} and {}",
            bundle.cert_path,
            bundle.key_path
        );
        *self.bundle.write() = Some(bundle);
    }

    pub fn current(&self) -> Option<Arc<CertifiedKey>> {
        self.bundle
            .read()
            .as_ref()
            .map(|bundle| Arc::clone(&bundle.certified_key))
    }

    pub fn bundle(&self) -> Option<Arc<CertificateBundle>> {
        self.bundle.read().clone()
    }

    pub fn has_certificate(&self) -> bool {
        self.bundle.read().is_some()
    }
}

impl ResolvesServerCert for CertificateCache {
    fn resolve(&self, _client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        self.current()
    }
}
