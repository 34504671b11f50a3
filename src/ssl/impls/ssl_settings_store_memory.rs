use async_trait::async_trait;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::ssl_settings::SslSettings;
use crate::ssl::structs::ssl_settings_store_memory::SslSettingsStoreMemory;
use crate::ssl::traits::ssl_settings_store::SslSettingsStore;

impl SslSettingsStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: SslSettings) -> Self {
        Self {
            settings: parking_lot::RwLock::new(settings),
        }
    }
}

#[async_trait]
impl SslSettingsStore for SslSettingsStoreMemory {
    async fn settings(&self) -> Result<SslSettings, CertificateError> {
        Ok(self.settings.read().clone())
    }

    async fn update_settings(&self, settings: &SslSettings) -> Result<(), CertificateError> {
        *self.settings.write() = settings.clone();
        Ok(())
    }
}
