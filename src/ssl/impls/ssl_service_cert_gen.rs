use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::ssl_service::SslService;
use chrono::{Datelike, Months, Utc};
use log::info;
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair};
use std::path::Path;

const SELF_SIGNED_COMMON_NAME: &str = "localhost";
const SELF_SIGNED_VALIDITY_MONTHS: u32 = 60;

impl SslService {
    pub async fn generate_self_signed_certificates(
        &self,
        host: &str,
        cert_path: &str,
        key_path: &str,
    ) -> Result<(), CertificateError> {
        if host.is_empty() {
            return Err(CertificateError::Configuration(String::from("host can't be empty")));
        }

        info!("[CERTGEN] No cert files found, generating self signed ssl certificates for {}", host);
        let (cert_pem, key_pem) = Self::generate_self_signed_pem(host)?;

        Self::write_pem(cert_path, cert_pem.as_bytes()).await?;
        Self::write_pem(key_path, key_pem.as_bytes()).await?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(key_path, std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| CertificateError::storage("Unable to restrict", key_path, e))?;
        }

        info!("[CERTGEN] The files {} and {} have been generated", cert_path, key_path);
        Ok(())
    }

    /// Builds a self-signed certificate for `localhost` and `host`, valid
    /// for five years from today. Returns `(cert_pem, key_pem)`.
    pub fn generate_self_signed_pem(host: &str) -> Result<(String, String), CertificateError> {
        let mut subject_alt_names = vec![String::from(SELF_SIGNED_COMMON_NAME)];
        if host != SELF_SIGNED_COMMON_NAME {
            subject_alt_names.push(host.to_string());
        }

        let mut params = CertificateParams::new(subject_alt_names)
            .map_err(|e| CertificateError::Generation(e.to_string()))?;
        let mut distinguished_name = DistinguishedName::new();
        distinguished_name.push(DnType::CommonName, SELF_SIGNED_COMMON_NAME);
        params.distinguished_name = distinguished_name;

        let now = Utc::now();
        let expires = now
            .checked_add_months(Months::new(SELF_SIGNED_VALIDITY_MONTHS))
            .ok_or_else(|| CertificateError::Generation(String::from("validity window overflows")))?;
        params.not_before = rcgen::date_time_ymd(now.year(), now.month() as u8, now.day() as u8);
        params.not_after = rcgen::date_time_ymd(expires.year(), expires.month() as u8, expires.day() as u8);

        let key_pair = KeyPair::generate().map_err(|e| CertificateError::Generation(e.to_string()))?;
        let cert = params
            .self_signed(&key_pair)
            .map_err(|e| CertificateError::Generation(e.to_string()))?;
        Ok((cert.pem(), key_pair.serialize_pem()))
    }

    async fn write_pem(path: &str, data: &[u8]) -> Result<(), CertificateError> {
        if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CertificateError::storage("Unable to create", &parent.to_string_lossy(), e))?;
        }
        tokio::fs::write(path, data)
            .await
            .map_err(|e| CertificateError::storage("Unable to write", path, e))
    }
}
