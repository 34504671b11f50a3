use async_trait::async_trait;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::ssl_settings::SslSettings;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SslSettingsStore: Send + Sync {
    /// Returns the stored record, or the default record when nothing was written yet.
    async fn settings(&self) -> Result<SslSettings, CertificateError>;

    async fn update_settings(&self, settings: &SslSettings) -> Result<(), CertificateError>;
}
