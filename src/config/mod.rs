use dashmap::DashMap;
use std::env;
use std::sync::Arc;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}

/// Configuration service
///
/// A key/value view over the process environment. Values can be overridden
/// with [`ConfigService::set`] before the server configuration is read.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process environment.
    pub fn from_env() -> Self {
        let service = Self::default();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    fn parse_bool(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        let Some(raw) = self.get(key) else {
            return Ok(default);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
        }
    }
}

/// Settings the server needs at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seed the store with the sample products on startup.
    pub seed_sample_data: bool,
    /// `tracing-subscriber` filter directive.
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_sample_data: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `SEED_SAMPLE_DATA` and `RUST_LOG`.
    pub fn from_service(config: &ConfigService) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = match config.get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                value: raw,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: config.get("HOST").unwrap_or(defaults.host),
            port,
            seed_sample_data: config.parse_bool("SEED_SAMPLE_DATA", defaults.seed_sample_data)?,
            log_filter: config.get("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
