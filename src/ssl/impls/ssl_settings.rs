use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::ssl_settings::SslSettings;

impl SslSettings {
    pub fn has_certificate(&self) -> bool {
        !self.cert_path.is_empty() && !self.key_path.is_empty()
    }

    /// Rejects records naming only half of a pair, or a CA bundle without a
    /// server identity.
    pub fn validate(&self) -> Result<(), CertificateError> {
        if self.cert_path.is_empty() != self.key_path.is_empty() {
            return Err(CertificateError::Configuration(format!(
                "certificate path ({}) and key path ({}) must be set together",
                self.cert_path, self.key_path
            )));
        }
        if !self.ca_cert_path.is_empty() && !self.has_certificate() {
            return Err(CertificateError::Configuration(format!(
                "a CA cert path ({}) requires an SSL cert and key file",
                self.ca_cert_path
            )));
        }
        Ok(())
    }
}
