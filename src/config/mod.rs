//! Configuration module for the booking backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "sqlite:./data/randevu.sqlite";
const DEFAULT_UPLOAD_DIR: &str = "./uploads";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Which record store implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StoreBackend::Sqlite),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::UnknownLogFormat(other.to_string())),
        }
    }
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidBindAddr(String),
    InvalidUploadLimit(String),
    UnknownStore(String),
    UnknownLogFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBindAddr(v) => write!(f, "Invalid RANDEVU_BIND_ADDR: {}", v),
            ConfigError::InvalidUploadLimit(v) => {
                write!(f, "Invalid RANDEVU_MAX_UPLOAD_BYTES: {}", v)
            }
            ConfigError::UnknownStore(v) => {
                write!(f, "Unknown RANDEVU_STORE '{}' (expected sqlite or memory)", v)
            }
            ConfigError::UnknownLogFormat(v) => {
                write!(f, "Unknown RANDEVU_LOG_FORMAT '{}' (expected pretty or json)", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Relational database connection string
    pub database_url: String,
    /// Record store implementation
    pub store_backend: StoreBackend,
    /// Directory uploaded files are written to and served from
    pub upload_dir: PathBuf,
    /// Public base URL for upload links; derived from the Host header when unset
    pub public_base_url: Option<String>,
    /// Maximum accepted upload body size in bytes
    pub max_upload_bytes: usize,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let store_backend = match lookup("RANDEVU_STORE") {
            Some(v) => v.parse()?,
            None => StoreBackend::Sqlite,
        };

        let upload_dir = lookup("RANDEVU_UPLOAD_DIR")
            .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string())
            .into();

        let public_base_url = lookup("RANDEVU_PUBLIC_BASE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let max_upload_bytes = match lookup("RANDEVU_MAX_UPLOAD_BYTES") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidUploadLimit(v))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let bind_addr_raw =
            lookup("RANDEVU_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr_raw))?;

        let log_level = lookup("RANDEVU_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_format = match lookup("RANDEVU_LOG_FORMAT") {
            Some(v) => v.parse()?,
            None => LogFormat::Pretty,
        };

        Ok(Self {
            database_url,
            store_backend,
            upload_dir,
            public_base_url,
            max_upload_bytes,
            bind_addr,
            log_level,
            log_format,
        })
    }
}
