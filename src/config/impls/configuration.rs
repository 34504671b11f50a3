use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::ssl_config::SslConfig;
use crate::structs::Cli;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            ssl: SslConfig {
                host: String::from("127.0.0.1"),
                data_path: String::from("data"),
                settings_database: String::from("sqlite://data/settings.db"),
                ssl_cert: String::new(),
                ssl_key: String::new(),
                ssl_ca_cert: String::new(),
            },
            api_server: ApiServerConfig {
                https_bind_address: String::from("0.0.0.0:9443"),
                http_bind_address: String::from("0.0.0.0:9000"),
                api_key: String::from("MyApiKey"),
                keep_alive: 60,
                request_timeout: 30,
                disconnect_timeout: 30,
                threads: available_parallelism().map(|n| n.get() as u64).unwrap_or(4),
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => Self::load(data.as_slice()).map_err(ConfigurationError::ParseError),
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path).map_err(ConfigurationError::IOError)?;
        file.write_all(data.as_ref()).map_err(ConfigurationError::IOError)
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new("will not create automatically the config file"));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and restart, exiting now...", path);
                        Err(CustomError::new("created config file"))
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        Err(CustomError::from(e))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    /// Command line values take precedence over the file.
    pub fn apply_cli(&mut self, args: &Cli) {
        if let Some(host) = &args.host {
            self.ssl.host = host.clone();
        }
        if let Some(cert) = &args.sslcert {
            self.ssl.ssl_cert = cert.clone();
        }
        if let Some(key) = &args.sslkey {
            self.ssl.ssl_key = key.clone();
        }
        if let Some(ca_cert) = &args.sslcacert {
            self.ssl.ssl_ca_cert = ca_cert.clone();
        }
    }

    pub fn validate(&self) -> Result<(), CustomError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(CustomError::new(format!("[VALIDATE CONFIG] Unknown log level: \"{}\"", self.log_level)));
        }
        for (name, value) in [
            ("api_server.https_bind_address", &self.api_server.https_bind_address),
            ("api_server.http_bind_address", &self.api_server.http_bind_address),
        ] {
            if value.parse::<SocketAddr>().is_err() {
                return Err(CustomError::new(format!("[VALIDATE CONFIG] Error checking {} [:] \"{}\" is not a socket address", name, value)));
            }
        }
        if self.api_server.api_key.is_empty() {
            return Err(CustomError::new("[VALIDATE CONFIG] api_server.api_key can't be empty"));
        }
        if self.api_server.threads == 0 {
            return Err(CustomError::new("[VALIDATE CONFIG] api_server.threads must be at least 1"));
        }
        if self.ssl.data_path.is_empty() {
            return Err(CustomError::new("[VALIDATE CONFIG] ssl.data_path can't be empty"));
        }
        Ok(())
    }
}
