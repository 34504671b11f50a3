use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::info;
use serde_json::json;
use crate::api::api_ssl::{api_service_ssl_ca_get, api_service_ssl_get, api_service_ssl_put};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;
use crate::config::structs::configuration::Configuration;

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("/api/ssl")
            .route(web::get().to(api_service_ssl_get))
            .route(web::put().to(api_service_ssl_put)));
        cfg.service(web::resource("/api/ssl/ca").route(web::get().to(api_service_ssl_ca_get)));
    })
}

/// Binds one API listener. With `tls` set the listener serves HTTPS using
/// the given rustls config, otherwise plaintext HTTP.
pub fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
    tls: Option<rustls::ServerConfig>,
) -> std::io::Result<(ServerHandle, Server)>
{
    let api_server = data.config.api_server.clone();
    let server = HttpServer::new(move || {
        App::new()
            .configure(api_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(api_server.keep_alive))
        .client_request_timeout(Duration::from_secs(api_server.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(api_server.disconnect_timeout))
        .workers(api_server.threads as usize);

    let server = match tls {
        Some(tls_config) => {
            info!("[API] Starting server listener with SSL on {}", addr);
            server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        }
        None => {
            info!("[API] Starting server listener on {}", addr);
            server.bind((addr.ip(), addr.port()))?
        }
    }
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub fn api_service_token(request: &HttpRequest, config: &Configuration) -> Option<HttpResponse>
{
    let params = match web::Query::<QueryToken>::from_query(request.query_string()) {
        Ok(params) => params,
        Err(_) => {
            return Some(HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": "invalid query"
            })));
        }
    };
    match &params.token {
        None => {
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "missing token"
            })))
        }
        Some(token_code) if token_code != &config.api_server.api_key => {
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "invalid token"
            })))
        }
        Some(_) => None
    }
}

pub async fn api_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
