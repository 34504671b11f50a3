use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info, warn};
use tokio::runtime::Builder;
use sslkeeper::api::api::api_service;
use sslkeeper::api::structs::api_service_data::ApiServiceData;
use sslkeeper::common::common::setup_logging;
use sslkeeper::config::structs::configuration::Configuration;
use sslkeeper::ssl::ssl::create_server_config_with_resolver;
use sslkeeper::ssl::structs::restart_signal::RestartSignal;
use sslkeeper::ssl::structs::ssl_file_service_local::SslFileServiceLocal;
use sslkeeper::ssl::structs::ssl_service::SslService;
use sslkeeper::ssl::structs::ssl_settings_store_sqlite::SslSettingsStoreSqlite;
use sslkeeper::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    config.apply_cli(&args);
    let config = Arc::new(config);

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let https_address: SocketAddr = match config.api_server.https_bind_address.parse() {
                Ok(address) => address,
                Err(_) => exit(1)
            };
            let http_address: SocketAddr = match config.api_server.http_bind_address.parse() {
                Ok(address) => address,
                Err(_) => exit(1)
            };

            if let Err(e) = tokio::fs::create_dir_all(&config.ssl.data_path).await {
                error!("[BOOT] Unable to create data path {}: {}", config.ssl.data_path, e);
                exit(1);
            }
            let settings_store = match SslSettingsStoreSqlite::connect(&config.ssl.settings_database).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    error!("[BOOT] Unable to open settings database: {}", e);
                    exit(1);
                }
            };
            let file_service = Arc::new(SslFileServiceLocal::new(config.ssl.data_path.clone()));
            let restart_signal = Arc::new(RestartSignal::new());
            let ssl_service = Arc::new(SslService::new(file_service, settings_store, restart_signal.hook()));

            if let Err(e) = ssl_service.init(
                &config.ssl.host,
                &config.ssl.ssl_cert,
                &config.ssl.ssl_key,
                &config.ssl.ssl_ca_cert
            ).await {
                error!("[BOOT] Failed initializing SSL: {}", e);
                exit(1);
            }

            let data = Arc::new(ApiServiceData {
                ssl_service: ssl_service.clone(),
                config: config.clone(),
            });

            loop {
                let settings = match ssl_service.ssl_settings().await {
                    Ok(settings) => settings,
                    Err(e) => {
                        error!("[BOOT] Unable to read SSL settings: {}", e);
                        exit(1);
                    }
                };
                let tls_config = match create_server_config_with_resolver(ssl_service.certificate_cache()) {
                    Ok(tls_config) => tls_config,
                    Err(e) => {
                        error!("[BOOT] Unable to build TLS configuration: {}", e);
                        exit(1);
                    }
                };

                let mut handles = Vec::new();
                let mut futures = Vec::new();
                let (handle, future) = api_service(https_address, data.clone(), Some(tls_config))?;
                handles.push(handle);
                futures.push(future);
                if settings.http_enabled {
                    let (handle, future) = api_service(http_address, data.clone(), None)?;
                    handles.push(handle);
                    futures.push(future);
                }
                let mut servers = tokio::spawn(try_join_all(futures));

                tokio::select! {
                    _ = restart_signal.wait() => {
                        info!("[BOOT] Restarting listeners...");
                        for handle in &handles {
                            handle.stop(true).await;
                        }
                        let _ = servers.await;
                        restart_signal.acknowledge();
                    }
                    result = &mut servers => {
                        match result {
                            Ok(Ok(_)) => warn!("[BOOT] Listeners stopped"),
                            Ok(Err(e)) => error!("[BOOT] Listener failed: {}", e),
                            Err(e) => error!("[BOOT] Listener task failed: {}", e),
                        }
                        break;
                    }
                    _ = tokio::signal::ctrl_c() => {
                        info!("Shutdown request received, shutting down...");
                        for handle in &handles {
                            handle.stop(true).await;
                        }
                        let _ = servers.await;
                        break;
                    }
                }
            }

            info!("Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}
