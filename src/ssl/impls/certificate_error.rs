use crate::ssl::enums::certificate_error::CertificateError;

impl CertificateError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CertificateError::NotFound(_))
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, CertificateError::Configuration(_))
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, CertificateError::Storage(_) | CertificateError::Database(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, CertificateError::Parse(_) | CertificateError::MissingCertificateData)
    }

    pub(crate) fn storage(context: &str, path: &str, error: std::io::Error) -> CertificateError {
        CertificateError::Storage(format!("{} {}: {}", context, path, error))
    }
}
