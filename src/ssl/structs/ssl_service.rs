use crate::ssl::structs::certificate_cache::CertificateCache;
use crate::ssl::structs::restart_signal::RestartHook;
use crate::ssl::traits::ssl_file_service::SslFileService;
use crate::ssl::traits::ssl_settings_store::SslSettingsStore;
use std::sync::Arc;

pub struct SslService {
    pub(crate) file_service: Arc<dyn SslFileService>,
    pub(crate) settings_store: Arc<dyn SslSettingsStore>,
    pub(crate) certificate_cache: Arc<CertificateCache>,
    pub(crate) restart_hook: RestartHook,
    pub(crate) mutation_lock: tokio::sync::Mutex<()>,
}
