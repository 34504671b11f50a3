use serde::{
    Deserialize,
    Serialize
};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SslUpdateRequest {
    pub cert: Option<String>,
    pub key: Option<String>,
    pub http_enabled: Option<bool>,
}
