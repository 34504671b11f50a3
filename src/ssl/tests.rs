#[cfg(test)]
mod ssl_tests {
    use crate::ssl::enums::certificate_error::CertificateError;
    use crate::ssl::structs::restart_signal::RestartHook;
    use crate::ssl::structs::ssl_service::SslService;
    use crate::ssl::structs::ssl_settings::SslSettings;
    use crate::ssl::traits::ssl_file_service::MockSslFileService;
    use crate::ssl::traits::ssl_settings_store::MockSslSettingsStore;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    fn counting_hook() -> (RestartHook, Arc<AtomicUsize>) {
        let counter = Arc::new(AtomicUsize::new(0));
        let hook_counter = Arc::clone(&counter);
        let hook: RestartHook = Arc::new(move || {
            hook_counter.fetch_add(1, Ordering::SeqCst);
        });
        (hook, counter)
    }

    fn write_pair(dir: &TempDir, host: &str) -> (String, String) {
        let (cert_pem, key_pem) = SslService::generate_self_signed_pem(host).unwrap();
        let cert_path = dir.path().join(format!("{}-cert.pem", host));
        let key_path = dir.path().join(format!("{}-key.pem", host));
        std::fs::write(&cert_path, cert_pem).unwrap();
        std::fs::write(&key_path, key_pem).unwrap();
        (
            cert_path.to_string_lossy().into_owned(),
            key_path.to_string_lossy().into_owned(),
        )
    }

    fn service(files: MockSslFileService, store: MockSslSettingsStore) -> (SslService, Arc<AtomicUsize>) {
        let (hook, counter) = counting_hook();
        (SslService::new(Arc::new(files), Arc::new(store), hook), counter)
    }

    #[tokio::test]
    async fn test_set_certificates_store_failure_keeps_state() {
        let (cert_pem, key_pem) = SslService::generate_self_signed_pem("127.0.0.1").unwrap();
        let mut files = MockSslFileService::new();
        files
            .expect_store_ssl_cert_pair()
            .times(1)
            .returning(|_, _| Err(CertificateError::Storage("disk full".to_string())));
        files.expect_discard_ssl_files().times(0);
        let mut store = MockSslSettingsStore::new();
        store.expect_settings().returning(|| Ok(SslSettings::default()));
        store.expect_update_settings().times(0);
        let (service, restarts) = service(files, store);

        let result = service.set_certificates(cert_pem.as_bytes(), key_pem.as_bytes()).await;
        assert!(result.unwrap_err().is_storage());
        assert!(service.raw_certificate().is_none());
        assert_eq!(restarts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_set_certificates_mismatch_never_reaches_storage() {
        let (cert_pem, _) = SslService::generate_self_signed_pem("127.0.0.1").unwrap();
        let (_, other_key_pem) = SslService::generate_self_signed_pem("127.0.0.2").unwrap();
        let mut files = MockSslFileService::new();
        files.expect_store_ssl_cert_pair().times(0);
        let mut store = MockSslSettingsStore::new();
        store.expect_settings().times(0);
        store.expect_update_settings().times(0);
        let (service, restarts) = service(files, store);

        let result = service.set_certificates(cert_pem.as_bytes(), other_key_pem.as_bytes()).await;
        assert!(result.unwrap_err().is_parse());
        assert_eq!(restarts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_set_certificates_settings_write_failure_skips_restart() {
        let dir = TempDir::new().unwrap();
        let (cert_path, key_path) = write_pair(&dir, "127.0.0.1");
        let cert_pem = std::fs::read(&cert_path).unwrap();
        let key_pem = std::fs::read(&key_path).unwrap();
        let stored = vec![cert_path.clone(), key_path.clone()];
        let mut files = MockSslFileService::new();
        files
            .expect_store_ssl_cert_pair()
            .times(1)
            .returning(move |_, _| Ok((cert_path.clone(), key_path.clone())));
        files
            .expect_discard_ssl_files()
            .times(1)
            .withf(move |paths: &[String]| paths == stored.as_slice())
            .return_const(());
        let mut store = MockSslSettingsStore::new();
        store.expect_settings().returning(|| Ok(SslSettings::default()));
        store
            .expect_update_settings()
            .times(1)
            .returning(|_| Err(CertificateError::Storage("read-only database".to_string())));
        let (service, restarts) = service(files, store);

        assert!(service.set_certificates(&cert_pem, &key_pem).await.is_err());
        assert!(service.raw_certificate().is_none());
        assert_eq!(restarts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_set_http_enabled_write_failure_skips_restart() {
        let files = MockSslFileService::new();
        let mut store = MockSslSettingsStore::new();
        store.expect_settings().returning(|| Ok(SslSettings::default()));
        store
            .expect_update_settings()
            .times(1)
            .returning(|_| Err(CertificateError::Storage("locked".to_string())));
        let (service, restarts) = service(files, store);

        assert!(service.set_http_enabled(true).await.is_err());
        assert_eq!(restarts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_init_copy_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let (cert_path, key_path) = write_pair(&dir, "10.0.0.5");
        let mut files = MockSslFileService::new();
        files
            .expect_copy_ssl_cert_pair()
            .times(1)
            .returning(|_, _| Err(CertificateError::Storage("permission denied".to_string())));
        files.expect_default_ssl_certs_path().times(0);
        let mut store = MockSslSettingsStore::new();
        store.expect_settings().times(0);
        store.expect_update_settings().times(0);
        let (service, restarts) = service(files, store);

        let result = service.init("10.0.0.5", &cert_path, &key_path, "").await;
        assert!(result.unwrap_err().is_storage());
        assert!(service.raw_certificate().is_none());
        assert_eq!(restarts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_init_ca_copy_failure_is_fatal() {
        let dir = TempDir::new().unwrap();
        let (cert_path, key_path) = write_pair(&dir, "10.0.0.5");
        let (copied_cert, copied_key) = (cert_path.clone(), key_path.clone());
        let mut files = MockSslFileService::new();
        files
            .expect_copy_ssl_cert_pair()
            .returning(move |_, _| Ok((copied_cert.clone(), copied_key.clone())));
        files
            .expect_copy_ssl_ca_cert()
            .times(1)
            .returning(|_| Err(CertificateError::Storage("no such file".to_string())));
        let copied = vec![cert_path.clone(), key_path.clone()];
        files
            .expect_discard_ssl_files()
            .times(1)
            .withf(move |paths: &[String]| paths == copied.as_slice())
            .return_const(());
        let mut store = MockSslSettingsStore::new();
        store.expect_update_settings().times(0);
        let (service, _) = service(files, store);

        let result = service.init("10.0.0.5", &cert_path, &key_path, "/missing/ca.pem").await;
        assert!(result.is_err());
        assert!(service.raw_certificate().is_none());
    }

    #[tokio::test]
    async fn test_init_settings_write_failure_leaves_cache_empty() {
        let dir = TempDir::new().unwrap();
        let cert_path = dir.path().join("certs/cert.pem").to_string_lossy().into_owned();
        let key_path = dir.path().join("certs/key.pem").to_string_lossy().into_owned();
        let mut files = MockSslFileService::new();
        files
            .expect_default_ssl_certs_path()
            .times(1)
            .returning(move || (cert_path.clone(), key_path.clone()));
        let mut store = MockSslSettingsStore::new();
        store.expect_settings().returning(|| Ok(SslSettings::default()));
        store
            .expect_update_settings()
            .returning(|_| Err(CertificateError::Storage("disk full".to_string())));
        let (service, _) = service(files, store);

        assert!(service.init("10.0.0.5", "", "", "").await.is_err());
        assert!(service.raw_certificate().is_none());
    }

    #[tokio::test]
    async fn test_init_corrupt_recorded_certificate_is_fatal() {
        let dir = TempDir::new().unwrap();
        let cert_path = dir.path().join("cert.pem");
        let key_path = dir.path().join("key.pem");
        std::fs::write(&cert_path, "not a certificate").unwrap();
        std::fs::write(&key_path, "not a key").unwrap();
        let recorded = SslSettings {
            cert_path: cert_path.to_string_lossy().into_owned(),
            key_path: key_path.to_string_lossy().into_owned(),
            self_signed: true,
            ..SslSettings::default()
        };
        let mut files = MockSslFileService::new();
        files.expect_default_ssl_certs_path().times(0);
        let mut store = MockSslSettingsStore::new();
        store.expect_settings().returning(move || Ok(recorded.clone()));
        store.expect_update_settings().times(0);
        let (service, _) = service(files, store);

        let result = service.init("10.0.0.5", "", "", "").await;
        assert!(result.unwrap_err().is_parse());
        assert!(service.raw_certificate().is_none());
    }

    #[tokio::test]
    async fn test_init_unreadable_recorded_certificate_is_fatal() {
        let dir = TempDir::new().unwrap();
        let recorded_dir = dir.path().join("cert-is-a-directory");
        std::fs::create_dir_all(&recorded_dir).unwrap();
        let recorded = SslSettings {
            cert_path: recorded_dir.to_string_lossy().into_owned(),
            key_path: recorded_dir.to_string_lossy().into_owned(),
            self_signed: true,
            ..SslSettings::default()
        };
        let mut files = MockSslFileService::new();
        files.expect_default_ssl_certs_path().times(0);
        files.expect_store_ssl_cert_pair().times(0);
        files.expect_discard_ssl_files().times(0);
        let mut store = MockSslSettingsStore::new();
        store.expect_settings().returning(move || Ok(recorded.clone()));
        store.expect_update_settings().times(0);
        let (service, restarts) = service(files, store);

        let result = service.init("10.0.0.5", "", "", "").await;
        assert!(result.unwrap_err().is_storage());
        assert!(service.raw_certificate().is_none());
        assert_eq!(restarts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_init_supplied_mismatch_never_copies() {
        let dir = TempDir::new().unwrap();
        let (cert_path, _) = write_pair(&dir, "10.0.0.5");
        let (_, key_path) = write_pair(&dir, "10.0.0.6");
        let mut files = MockSslFileService::new();
        files.expect_copy_ssl_cert_pair().times(0);
        files.expect_copy_ssl_ca_cert().times(0);
        let mut store = MockSslSettingsStore::new();
        store.expect_settings().times(0);
        store.expect_update_settings().times(0);
        let (service, _) = service(files, store);

        let result = service.init("10.0.0.5", &cert_path, &key_path, "").await;
        assert!(result.unwrap_err().is_parse());
        assert!(service.raw_certificate().is_none());
    }

    #[tokio::test]
    async fn test_init_missing_recorded_certificate_regenerates() {
        let dir = TempDir::new().unwrap();
        let recorded = SslSettings {
            cert_path: dir.path().join("gone-cert.pem").to_string_lossy().into_owned(),
            key_path: dir.path().join("gone-key.pem").to_string_lossy().into_owned(),
            ..SslSettings::default()
        };
        let cert_path = dir.path().join("certs/cert.pem").to_string_lossy().into_owned();
        let key_path = dir.path().join("certs/key.pem").to_string_lossy().into_owned();
        let expected_cert_path = cert_path.clone();
        let mut files = MockSslFileService::new();
        files
            .expect_default_ssl_certs_path()
            .times(1)
            .returning(move || (cert_path.clone(), key_path.clone()));
        let mut store = MockSslSettingsStore::new();
        store.expect_settings().returning(move || Ok(recorded.clone()));
        store
            .expect_update_settings()
            .times(1)
            .withf(move |s: &SslSettings| s.self_signed && s.cert_path == expected_cert_path)
            .returning(|_| Ok(()));
        let (service, restarts) = service(files, store);

        service.init("10.0.0.5", "", "", "").await.unwrap();
        assert!(service.raw_certificate().is_some());
        assert_eq!(restarts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_ca_certificate_pem_read_failure_is_empty() {
        let files = MockSslFileService::new();
        let mut store = MockSslSettingsStore::new();
        store
            .expect_settings()
            .returning(|| Err(CertificateError::Storage("unavailable".to_string())));
        let (service, _) = service(files, store);

        assert!(service.ca_certificate_pem().await.is_empty());
        assert!(service.ssl_settings().await.is_err());
    }
}
