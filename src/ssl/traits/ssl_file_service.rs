use async_trait::async_trait;
use crate::ssl::enums::certificate_error::CertificateError;

/// All returned paths are canonical locations inside managed storage.
/// Copies and stored pairs always land in new files, so the files the
/// settings record points at stay intact until the record itself changes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SslFileService: Send + Sync {
    async fn copy_ssl_cert_pair(
        &self,
        cert_path: &str,
        key_path: &str,
    ) -> Result<(String, String), CertificateError>;

    async fn copy_ssl_ca_cert(&self, ca_cert_path: &str) -> Result<String, CertificateError>;

    async fn store_ssl_cert_pair(
        &self,
        cert: &[u8],
        key: &[u8],
    ) -> Result<(String, String), CertificateError>;

    /// Best effort; paths outside managed storage are left alone.
    async fn discard_ssl_files(&self, paths: &[String]);

    fn default_ssl_certs_path(&self) -> (String, String);
}
