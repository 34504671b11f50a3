use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SslConfig {
    /// Host name or IP embedded in a generated self-signed certificate.
    pub host: String,
    /// Root of the managed certificate storage.
    pub data_path: String,
    /// SQLite DSN holding the SSL settings record.
    pub settings_database: String,
    #[serde(default)]
    pub ssl_cert: String,
    #[serde(default)]
    pub ssl_key: String,
    #[serde(default)]
    pub ssl_ca_cert: String,
}
