use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let cfg = Self::from(EnvSettings::from_env()?);
        validate::validate(&cfg)?;
        Ok(cfg)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
    pub seed_demo_data: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
            seed_demo_data: defaults::DEFAULT_SEED_DEMO_DATA,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_idle: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_DATABASE_URL.to_string(),
            max_connections: defaults::DEFAULT_DB_MAX_CONNECTIONS,
            min_idle: defaults::DEFAULT_DB_MIN_IDLE,
        }
    }
}

/// Flat view of the process environment, one field per variable.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnvSettings {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub database_url: Option<String>,
    pub db_max_conns: u32,
    pub db_min_idle: u32,
    pub seed_demo_data: bool,
}

impl Default for EnvSettings {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
            database_url: None,
            db_max_conns: defaults::DEFAULT_DB_MAX_CONNECTIONS,
            db_min_idle: defaults::DEFAULT_DB_MIN_IDLE,
            seed_demo_data: defaults::DEFAULT_SEED_DEMO_DATA,
        }
    }
}

impl EnvConfig for EnvSettings {}

impl From<EnvSettings> for AppConfig {
    fn from(env: EnvSettings) -> Self {
        let url = env
            .database_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| defaults::DEFAULT_DATABASE_URL.to_string());

        Self {
            general: GeneralConfig {
                host: env.host,
                port: env.port,
                seed_demo_data: env.seed_demo_data,
            },
            logging: LoggingConfig {
                rust_log: env.rust_log,
            },
            database: DatabaseConfig {
                url,
                max_connections: env.db_max_conns,
                min_idle: env.db_min_idle,
            },
        }
    }
}
