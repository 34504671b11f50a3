use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SslSettings {
    pub cert_path: String,
    pub key_path: String,
    pub ca_cert_path: String,
    pub self_signed: bool,
    pub http_enabled: bool,
}
