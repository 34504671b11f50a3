use thiserror::Error;

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("Invalid SSL configuration: {0}")]
    Configuration(String),
    #[error("Certificate storage failure: {0}")]
    Storage(String),
    #[error("Failed to parse certificate: {0}")]
    Parse(String),
    #[error("Certificate file not found: {0}")]
    NotFound(String),
    #[error("Missing certificate files")]
    MissingCertificateData,
    #[error("Failed generating self signed certificate: {0}")]
    Generation(String),
    #[error("Settings database error: {0}")]
    Database(#[from] sqlx::Error),
}
