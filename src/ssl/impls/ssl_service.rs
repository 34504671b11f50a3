use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::certificate_lookup::CertificateLookup;
use crate::ssl::structs::certificate_bundle::CertificateBundle;
use crate::ssl::ssl::create_certificate_cache;
use crate::ssl::structs::certificate_cache::CertificateCache;
use crate::ssl::structs::restart_signal::RestartHook;
use crate::ssl::structs::ssl_service::SslService;
use crate::ssl::structs::ssl_settings::SslSettings;
use crate::ssl::traits::ssl_file_service::SslFileService;
use crate::ssl::traits::ssl_settings_store::SslSettingsStore;
use log::{info, warn};
use rustls::sign::CertifiedKey;
use std::sync::Arc;

impl std::fmt::Debug for SslService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SslService")
            .field("certificate_cache", &self.certificate_cache)
            .finish()
    }
}

impl SslService {
    pub fn new(
        file_service: Arc<dyn SslFileService>,
        settings_store: Arc<dyn SslSettingsStore>,
        restart_hook: RestartHook,
    ) -> SslService {
        SslService {
            file_service,
            settings_store,
            certificate_cache: create_certificate_cache(),
            restart_hook,
            mutation_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Resolves the identity to serve at startup, in priority order:
    /// supplied files, the pair already on record, then a freshly generated
    /// self-signed pair. Never signals a restart.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn init(
        &self,
        host: &str,
        cert_path: &str,
        key_path: &str,
        ca_cert_path: &str,
    ) -> Result<(), CertificateError> {
        if !cert_path.is_empty() && !key_path.is_empty() {
            // Reject a bad pair before anything lands in managed storage.
            CertificateBundle::load(cert_path, key_path).await?;
            let (new_cert_path, new_key_path) = self
                .file_service
                .copy_ssl_cert_pair(cert_path, key_path)
                .await?;
            let mut new_ca_cert_path = String::new();
            if !ca_cert_path.is_empty() {
                match self.file_service.copy_ssl_ca_cert(ca_cert_path).await {
                    Ok(path) => new_ca_cert_path = path,
                    Err(error) => {
                        self.file_service.discard_ssl_files(&[new_cert_path, new_key_path]).await;
                        return Err(error);
                    }
                }
            }
            info!("[SSL] Using supplied certificate {}", new_cert_path);
            return self
                .adopt_managed_files(&new_cert_path, &new_key_path, &new_ca_cert_path, true)
                .await;
        }
        if !ca_cert_path.is_empty() {
            return Err(CertificateError::Configuration(format!(
                "supplying a CA cert path ({}) requires an SSL cert and key file",
                ca_cert_path
            )));
        }

        let settings = self.ssl_settings().await?;
        if settings.has_certificate() {
            match Self::lookup_existing(&settings.cert_path, &settings.key_path).await? {
                CertificateLookup::Loaded(bundle) => {
                    info!("[SSL] Reusing certificate {}", settings.cert_path);
                    self.certificate_cache.publish(bundle);
                    return Ok(());
                }
                CertificateLookup::Absent => {
                    warn!(
                        "[SSL] Recorded certificate {} or key {} no longer exists",
                        settings.cert_path, settings.key_path
                    );
                }
            }
        }

        let (default_cert_path, default_key_path) = self.file_service.default_ssl_certs_path();
        self.generate_self_signed_certificates(host, &default_cert_path, &default_key_path)
            .await?;
        self.cache_info(&default_cert_path, &default_key_path, "", true)
            .await
            .map(|_| ())
    }

    /// Loads the recorded pair; a missing file is the only failure folded into `Absent`.
    pub async fn lookup_existing(
        cert_path: &str,
        key_path: &str,
    ) -> Result<CertificateLookup, CertificateError> {
        match CertificateBundle::load(cert_path, key_path).await {
            Ok(bundle) => Ok(CertificateLookup::Loaded(bundle)),
            Err(error) if error.is_not_found() => Ok(CertificateLookup::Absent),
            Err(error) => Err(error),
        }
    }

    pub fn raw_certificate(&self) -> Option<Arc<CertifiedKey>> {
        self.certificate_cache.current()
    }

    pub fn certificate_cache(&self) -> Arc<CertificateCache> {
        Arc::clone(&self.certificate_cache)
    }

    pub async fn ssl_settings(&self) -> Result<SslSettings, CertificateError> {
        self.settings_store.settings().await
    }

    /// Contents of the configured CA bundle. Empty when none is configured or
    /// when it cannot be read.
    pub async fn ca_certificate_pem(&self) -> Vec<u8> {
        let settings = match self.ssl_settings().await {
            Ok(settings) => settings,
            Err(error) => {
                warn!("[SSL] Unable to read SSL settings: {}", error);
                return Vec::new();
            }
        };
        if settings.ca_cert_path.is_empty() {
            return Vec::new();
        }
        match tokio::fs::read(&settings.ca_cert_path).await {
            Ok(data) => data,
            Err(error) => {
                warn!("[SSL] Reading CA cert {}: {}", settings.ca_cert_path, error);
                Vec::new()
            }
        }
    }

    /// Parses the pair, writes the settings record, then publishes the pair.
    /// Nothing is written or published if parsing fails. Returns the record
    /// as it was before the write.
    pub(crate) async fn cache_info(
        &self,
        cert_path: &str,
        key_path: &str,
        ca_cert_path: &str,
        self_signed: bool,
    ) -> Result<SslSettings, CertificateError> {
        let bundle = CertificateBundle::load(cert_path, key_path).await?;
        let previous = self.settings_store.settings().await?;
        let mut settings = previous.clone();
        settings.cert_path = cert_path.to_string();
        settings.key_path = key_path.to_string();
        settings.ca_cert_path = ca_cert_path.to_string();
        settings.self_signed = self_signed;
        settings.validate()?;
        self.settings_store.update_settings(&settings).await?;
        self.certificate_cache.publish(bundle);
        Ok(previous)
    }

    /// Records a pair the file service just wrote under fresh names. The
    /// record write is the commit point: on failure the new files are
    /// removed, on success the files the old record pointed at are.
    /// `ca_is_new` tells whether `ca_cert_path` was written by this call too.
    pub(crate) async fn adopt_managed_files(
        &self,
        cert_path: &str,
        key_path: &str,
        ca_cert_path: &str,
        ca_is_new: bool,
    ) -> Result<(), CertificateError> {
        match self.cache_info(cert_path, key_path, ca_cert_path, false).await {
            Ok(previous) => {
                let adopted = [cert_path, key_path, ca_cert_path];
                let superseded: Vec<String> = [previous.cert_path, previous.key_path, previous.ca_cert_path]
                    .into_iter()
                    .filter(|path| !path.is_empty() && !adopted.contains(&path.as_str()))
                    .collect();
                self.file_service.discard_ssl_files(&superseded).await;
                Ok(())
            }
            Err(error) => {
                let mut created = vec![cert_path.to_string(), key_path.to_string()];
                if ca_is_new && !ca_cert_path.is_empty() {
                    created.push(ca_cert_path.to_string());
                }
                self.file_service.discard_ssl_files(&created).await;
                Err(error)
            }
        }
    }
}
