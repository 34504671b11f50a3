use crate::ssl::structs::ssl_settings::SslSettings;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct SslSettingsStoreMemory {
    pub(crate) settings: RwLock<SslSettings>,
}
