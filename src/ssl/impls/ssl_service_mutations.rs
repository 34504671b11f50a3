use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::structs::ssl_service::SslService;
use log::info;

impl SslService {
    /// Replaces the served identity with an uploaded pair and restarts the
    /// listener. The CA cert path on record is carried over unchanged.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn set_certificates(&self, cert: &[u8], key: &[u8]) -> Result<(), CertificateError> {
        if cert.is_empty() || key.is_empty() {
            return Err(CertificateError::MissingCertificateData);
        }
        CertificateBundle::from_pem(cert, key, "", "")?;

        let _guard = self.mutation_lock.lock().await;
        let settings = self.settings_store.settings().await?;
        let (cert_path, key_path) = self.file_service.store_ssl_cert_pair(cert, key).await?;
        // TODO: decide whether an uploaded certificate should drop the CA bundle it may not belong to.
        self.adopt_managed_files(&cert_path, &key_path, &settings.ca_cert_path, false)
            .await?;

        info!("[SSL] Certificate replaced with {}", cert_path);
        (self.restart_hook)();
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn set_http_enabled(&self, http_enabled: bool) -> Result<(), CertificateError> {
        let _guard = self.mutation_lock.lock().await;
        let mut settings = self.settings_store.settings().await?;
        if settings.http_enabled == http_enabled {
            return Ok(());
        }
        settings.http_enabled = http_enabled;
        self.settings_store.update_settings(&settings).await?;

        info!("[SSL] Plaintext HTTP listener {}", if http_enabled { "enabled" } else { "disabled" });
        (self.restart_hook)();
        Ok(())
    }
}
