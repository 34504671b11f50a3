use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use rustls::pki_types::CertificateDer;
use rustls::sign::CertifiedKey;
use std::io::ErrorKind;
use std::sync::Arc;

impl std::fmt::Debug for CertificateBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CertificateBundle")
            .field("certs_count", &self.certs_count())
            .field("cert_path", &self.cert_path)
            .field("key_path", &self.key_path)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl CertificateBundle {
    /// Parses a PEM certificate chain and private key and checks that the key
    /// belongs to the leaf certificate.
    pub fn from_pem(
        cert_pem: &[u8],
        key_pem: &[u8],
        cert_path: &str,
        key_path: &str,
    ) -> Result<Self, CertificateError> {
        let certified_key = Self::parse_certified_key(cert_pem, key_pem)?;
        Ok(CertificateBundle {
            certified_key: Arc::new(certified_key),
            loaded_at: chrono::Utc::now(),
            cert_path: cert_path.to_string(),
            key_path: key_path.to_string(),
        })
    }

    /// Reads and parses a pair from disk. A missing file is reported as
    /// `NotFound`; any other read failure as `Storage`.
    pub async fn load(cert_path: &str, key_path: &str) -> Result<Self, CertificateError> {
        let cert_pem = Self::read_file(cert_path).await?;
        let key_pem = Self::read_file(key_path).await?;
        Self::from_pem(&cert_pem, &key_pem, cert_path, key_path)
    }

    pub fn certs_count(&self) -> usize {
        self.certified_key.cert.len()
    }

    async fn read_file(path: &str) -> Result<Vec<u8>, CertificateError> {
        tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => CertificateError::NotFound(path.to_string()),
            _ => CertificateError::storage("Unable to read", path, e),
        })
    }

    fn parse_certified_key(cert_pem: &[u8], key_pem: &[u8]) -> Result<CertifiedKey, CertificateError> {
        let tls_certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut &*cert_pem)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CertificateError::Parse(e.to_string()))?;
        if tls_certs.is_empty() {
            return Err(CertificateError::Parse(
                "No certificates found in PEM data".to_string(),
            ));
        }
        let tls_key = rustls_pemfile::private_key(&mut &*key_pem)
            .map_err(|e| CertificateError::Parse(format!("malformed private key: {}", e)))?
            .ok_or_else(|| CertificateError::Parse("No private key found in PEM data".to_string()))?;
        let signing_key = rustls::crypto::ring::sign::any_supported_type(&tls_key)
            .map_err(|e| CertificateError::Parse(format!("unsupported private key: {}", e)))?;
        let certified_key = CertifiedKey::new(tls_certs, signing_key);
        certified_key
            .keys_match()
            .map_err(|e| CertificateError::Parse(format!("certificate and key do not match: {}", e)))?;
        Ok(certified_key)
    }
}
