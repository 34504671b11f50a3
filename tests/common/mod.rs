#![allow(dead_code)]
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use sslkeeper::config::structs::configuration::Configuration;
use sslkeeper::ssl::structs::restart_signal::RestartHook;
use sslkeeper::ssl::structs::ssl_file_service_local::SslFileServiceLocal;
use sslkeeper::ssl::structs::ssl_service::SslService;
use sslkeeper::ssl::structs::ssl_settings_store_memory::SslSettingsStoreMemory;
use tempfile::TempDir;

pub type TestService = Arc<SslService>;
pub type TestStore = Arc<SslSettingsStoreMemory>;

pub struct TestContext {
    pub dir: TempDir,
    pub store: TestStore,
    pub service: TestService,
    pub restarts: Arc<AtomicUsize>,
}

impl TestContext {
    pub fn restart_count(&self) -> usize {
        self.restarts.load(Ordering::SeqCst)
    }

    /// A second service over the same storage and settings, as after a process restart.
    pub fn reopen(&self) -> (TestService, Arc<AtomicUsize>) {
        let (hook, restarts) = counting_hook();
        let file_service = Arc::new(SslFileServiceLocal::new(self.dir.path().join("data")));
        (Arc::new(SslService::new(file_service, self.store.clone(), hook)), restarts)
    }
}

pub fn counting_hook() -> (RestartHook, Arc<AtomicUsize>) {
    let counter = Arc::new(AtomicUsize::new(0));
    let hook_counter = Arc::clone(&counter);
    let hook: RestartHook = Arc::new(move || {
        hook_counter.fetch_add(1, Ordering::SeqCst);
    });
    (hook, counter)
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn create_test_context() -> TestContext {
    let dir = create_temp_dir();
    let store = Arc::new(SslSettingsStoreMemory::new());
    let (hook, restarts) = counting_hook();
    let file_service = Arc::new(SslFileServiceLocal::new(dir.path().join("data")));
    let service = Arc::new(SslService::new(file_service, store.clone(), hook));
    TestContext { dir, store, service, restarts }
}

pub fn generate_pem_pair(host: &str) -> (String, String) {
    SslService::generate_self_signed_pem(host).expect("Failed to generate certificate")
}

/// Writes a fresh pair for `host` outside managed storage and returns its paths.
pub fn write_pem_pair(dir: &TempDir, host: &str) -> (String, String) {
    let (cert_pem, key_pem) = generate_pem_pair(host);
    let supplied = dir.path().join("supplied");
    std::fs::create_dir_all(&supplied).expect("Failed to create directory");
    let cert_path = supplied.join(format!("{}.crt", host));
    let key_path = supplied.join(format!("{}.key", host));
    std::fs::write(&cert_path, cert_pem).expect("Failed to write certificate");
    std::fs::write(&key_path, key_pem).expect("Failed to write key");
    (
        cert_path.to_string_lossy().into_owned(),
        key_path.to_string_lossy().into_owned(),
    )
}

pub fn leaf_certificate(service: &SslService) -> Vec<u8> {
    let certified_key = service.raw_certificate().expect("No certificate cached");
    certified_key.cert[0].as_ref().to_vec()
}

pub fn pem_leaf_der(cert_pem: &str) -> Vec<u8> {
    let cert = rustls_pemfile::certs(&mut cert_pem.as_bytes())
        .next()
        .expect("No certificate in PEM")
        .expect("Invalid PEM");
    cert.as_ref().to_vec()
}

pub fn create_test_config() -> Arc<Configuration> {
    let mut config = Configuration::init();
    config.api_server.api_key = String::from("TestApiKey");
    config.api_server.threads = 1;
    config.ssl.settings_database = String::from("sqlite::memory:");
    Arc::new(config)
}
