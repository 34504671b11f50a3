use crate::api::api::api_service_token;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::api_ssl::SslUpdateRequest;
use crate::ssl::enums::certificate_error::CertificateError;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use actix_web::{
    web,
    HttpRequest,
    HttpResponse
};
use log::{error, info};
use serde_json::json;
use std::sync::Arc;

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_ssl_get(
    request: HttpRequest,
    data: Data<Arc<ApiServiceData>>,
) -> HttpResponse {
    if let Some(response) = api_service_token(&request, &data.config) {
        return response;
    }
    match data.ssl_service.ssl_settings().await {
        Ok(settings) => HttpResponse::Ok().content_type(ContentType::json()).json(settings),
        Err(e) => api_service_ssl_error(e),
    }
}

/// Applies an uploaded certificate pair and/or the plaintext listener flag.
/// Either change schedules a listener restart.
#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_ssl_put(
    request: HttpRequest,
    data: Data<Arc<ApiServiceData>>,
    body: web::Json<SslUpdateRequest>,
) -> HttpResponse {
    if let Some(response) = api_service_token(&request, &data.config) {
        return response;
    }
    let body = body.into_inner();
    if body.cert.is_some() || body.key.is_some() {
        let cert = body.cert.unwrap_or_default();
        let key = body.key.unwrap_or_default();
        if let Err(e) = data.ssl_service.set_certificates(cert.as_bytes(), key.as_bytes()).await {
            return api_service_ssl_error(e);
        }
        info!("[API] SSL certificate updated");
    }
    if let Some(http_enabled) = body.http_enabled
        && let Err(e) = data.ssl_service.set_http_enabled(http_enabled).await
    {
        return api_service_ssl_error(e);
    }
    match data.ssl_service.ssl_settings().await {
        Ok(settings) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "settings": settings
        })),
        Err(e) => api_service_ssl_error(e),
    }
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_ssl_ca_get(
    request: HttpRequest,
    data: Data<Arc<ApiServiceData>>,
) -> HttpResponse {
    if let Some(response) = api_service_token(&request, &data.config) {
        return response;
    }
    HttpResponse::Ok()
        .content_type("application/x-pem-file")
        .body(data.ssl_service.ca_certificate_pem().await)
}

fn api_service_ssl_error(e: CertificateError) -> HttpResponse {
    if e.is_parse() || e.is_configuration() {
        return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
            "status": "invalid certificate",
            "message": e.to_string()
        }));
    }
    error!("[API] SSL operation failed: {}", e);
    HttpResponse::InternalServerError().content_type(ContentType::json()).json(json!({
        "status": "failed",
        "message": e.to_string()
    }))
}
