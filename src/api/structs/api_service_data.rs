//! Shared data context for API request handlers.

use crate::config::structs::configuration::Configuration;
use crate::ssl::structs::ssl_service::SslService;
use std::sync::Arc;

/// Injected into Actix-web's application data; cloned into every worker.
#[derive(Debug)]
pub struct ApiServiceData {
    pub ssl_service: Arc<SslService>,
    pub config: Arc<Configuration>,
}
