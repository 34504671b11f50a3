use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_cache::CertificateCache;
use std::sync::Arc;

pub fn create_certificate_cache() -> Arc<CertificateCache> {
    Arc::new(CertificateCache::new())
}

pub fn create_server_config_with_resolver(
    cache: Arc<CertificateCache>,
) -> Result<rustls::ServerConfig, CertificateError> {
    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = rustls::ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .map_err(|e| CertificateError::Configuration(e.to_string()))?
        .with_no_client_auth()
        .with_cert_resolver(cache);
    Ok(config)
}
