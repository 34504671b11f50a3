use async_trait::async_trait;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::ssl_settings::SslSettings;
use crate::ssl::structs::ssl_settings_store_sqlite::SslSettingsStoreSqlite;
use crate::ssl::traits::ssl_settings_store::SslSettingsStore;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Row};
use std::str::FromStr;
use std::time::Duration;

const LOG_PREFIX: &str = "[SQLite]";
const SETTINGS_ROW: i64 = 1;

impl SslSettingsStoreSqlite {
    #[tracing::instrument(level = "debug")]
    pub async fn connect(dsl: &str) -> Result<SslSettingsStoreSqlite, CertificateError> {
        let options = SqliteConnectOptions::from_str(dsl)?
            .create_if_missing(true)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        // A single long-lived connection keeps `sqlite::memory:` databases alive.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        info!("{} Opened SSL settings database {}", LOG_PREFIX, dsl);
        let store = SslSettingsStoreSqlite { pool };
        store.create_table().await?;
        Ok(store)
    }

    async fn create_table(&self) -> Result<(), CertificateError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS `ssl_settings` (\
                `id` INTEGER PRIMARY KEY NOT NULL, \
                `cert_path` TEXT NOT NULL DEFAULT '', \
                `key_path` TEXT NOT NULL DEFAULT '', \
                `ca_cert_path` TEXT NOT NULL DEFAULT '', \
                `self_signed` INTEGER NOT NULL DEFAULT 0, \
                `http_enabled` INTEGER NOT NULL DEFAULT 0)",
        )
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl SslSettingsStore for SslSettingsStoreSqlite {
    async fn settings(&self) -> Result<SslSettings, CertificateError> {
        let row = sqlx::query(
            "SELECT `cert_path`, `key_path`, `ca_cert_path`, `self_signed`, `http_enabled` FROM `ssl_settings` WHERE `id` = ?",
        )
            .bind(SETTINGS_ROW)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            None => Ok(SslSettings::default()),
            Some(row) => Ok(SslSettings {
                cert_path: row.try_get("cert_path")?,
                key_path: row.try_get("key_path")?,
                ca_cert_path: row.try_get("ca_cert_path")?,
                self_signed: row.try_get("self_signed")?,
                http_enabled: row.try_get("http_enabled")?,
            }),
        }
    }

    async fn update_settings(&self, settings: &SslSettings) -> Result<(), CertificateError> {
        sqlx::query(
            "INSERT INTO `ssl_settings` (`id`, `cert_path`, `key_path`, `ca_cert_path`, `self_signed`, `http_enabled`) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT(`id`) DO UPDATE SET \
                `cert_path` = excluded.`cert_path`, \
                `key_path` = excluded.`key_path`, \
                `ca_cert_path` = excluded.`ca_cert_path`, \
                `self_signed` = excluded.`self_signed`, \
                `http_enabled` = excluded.`http_enabled`",
        )
            .bind(SETTINGS_ROW)
            .bind(settings.cert_path.as_str())
            .bind(settings.key_path.as_str())
            .bind(settings.ca_cert_path.as_str())
            .bind(settings.self_signed)
            .bind(settings.http_enabled)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
