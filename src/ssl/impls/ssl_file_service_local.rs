use async_trait::async_trait;
use chrono::Utc;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::ssl_file_service_local::SslFileServiceLocal;
use crate::ssl::traits::ssl_file_service::SslFileService;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::AsyncWriteExt;

const SSL_CERTS_DIRECTORY: &str = "certs";
const SSL_CERT_FILENAME: &str = "cert.pem";
const SSL_KEY_FILENAME: &str = "key.pem";

impl SslFileServiceLocal {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            sequence: AtomicU64::new(0),
        }
    }

    pub fn certs_directory(&self) -> PathBuf {
        self.root.join(SSL_CERTS_DIRECTORY)
    }

    async fn ensure_certs_directory(&self) -> Result<PathBuf, CertificateError> {
        let directory = self.certs_directory();
        tokio::fs::create_dir_all(&directory)
            .await
            .map_err(|e| CertificateError::storage("Unable to create", &directory.to_string_lossy(), e))?;
        Ok(directory)
    }

    /// `cert-20260101120000-3.pem`; the sequence keeps names apart within one second.
    fn fresh_filename(&self, kind: &str) -> String {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}-{}.pem", kind, Utc::now().format("%Y%m%d%H%M%S"), sequence)
    }

    /// Writes `data` into a new file in managed storage. Existing files are never opened.
    async fn write_fresh(&self, data: &[u8], kind: &str, private: bool) -> Result<String, CertificateError> {
        let directory = self.ensure_certs_directory().await?;
        let destination = directory.join(self.fresh_filename(kind));
        let display = destination.to_string_lossy().into_owned();
        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            if private {
                options.mode(0o600);
            }
        }
        #[cfg(not(unix))]
        let _ = private;
        let mut file = options
            .open(&destination)
            .await
            .map_err(|e| CertificateError::storage("Unable to create", &display, e))?;
        file.write_all(data)
            .await
            .map_err(|e| CertificateError::storage("Unable to write", &display, e))?;
        file.sync_all()
            .await
            .map_err(|e| CertificateError::storage("Unable to sync", &display, e))?;
        Self::canonical(&destination).await
    }

    async fn copy_fresh(&self, source: &str, kind: &str, private: bool) -> Result<String, CertificateError> {
        let data = tokio::fs::read(source)
            .await
            .map_err(|e| CertificateError::storage("Unable to read", source, e))?;
        let destination = self.write_fresh(&data, kind, private).await?;
        info!("[SSL] Copied {} to {}", source, destination);
        Ok(destination)
    }

    async fn write_fresh_pair(&self, cert: &[u8], key: &[u8]) -> Result<(String, String), CertificateError> {
        let cert_path = self.write_fresh(cert, "cert", false).await?;
        match self.write_fresh(key, "key", true).await {
            Ok(key_path) => Ok((cert_path, key_path)),
            Err(error) => {
                self.discard_ssl_files(&[cert_path]).await;
                Err(error)
            }
        }
    }

    async fn canonical(path: &Path) -> Result<String, CertificateError> {
        tokio::fs::canonicalize(path)
            .await
            .map(|p| p.to_string_lossy().into_owned())
            .map_err(|e| CertificateError::storage("Unable to resolve", &path.to_string_lossy(), e))
    }

    async fn is_managed(&self, path: &str) -> bool {
        let (Ok(directory), Ok(file)) = (
            tokio::fs::canonicalize(self.certs_directory()).await,
            tokio::fs::canonicalize(path).await,
        ) else {
            return false;
        };
        file.parent() == Some(directory.as_path())
    }
}

#[async_trait]
impl SslFileService for SslFileServiceLocal {
    async fn copy_ssl_cert_pair(
        &self,
        cert_path: &str,
        key_path: &str,
    ) -> Result<(String, String), CertificateError> {
        let cert = self.copy_fresh(cert_path, "cert", false).await?;
        match self.copy_fresh(key_path, "key", true).await {
            Ok(key) => Ok((cert, key)),
            Err(error) => {
                self.discard_ssl_files(&[cert]).await;
                Err(error)
            }
        }
    }

    async fn copy_ssl_ca_cert(&self, ca_cert_path: &str) -> Result<String, CertificateError> {
        self.copy_fresh(ca_cert_path, "ca", false).await
    }

    async fn store_ssl_cert_pair(
        &self,
        cert: &[u8],
        key: &[u8],
    ) -> Result<(String, String), CertificateError> {
        self.write_fresh_pair(cert, key).await
    }

    async fn discard_ssl_files(&self, paths: &[String]) {
        for path in paths.iter().filter(|path| !path.is_empty()) {
            if !self.is_managed(path).await {
                continue;
            }
            match tokio::fs::remove_file(path).await {
                Ok(()) => info!("[SSL] Removed {}", path),
                Err(error) => warn!("[SSL] Unable to remove {}: {}", path, error),
            }
        }
    }

    fn default_ssl_certs_path(&self) -> (String, String) {
        let directory = self.certs_directory();
        (
            directory.join(SSL_CERT_FILENAME).to_string_lossy().into_owned(),
            directory.join(SSL_KEY_FILENAME).to_string_lossy().into_owned(),
        )
    }
}
