//! Service configuration.
//!
//! All environment access happens here, once, at startup. The rest of the
//! service receives the resulting immutable value.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// An environment variable is set to an unusable value.
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Immutable service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the routes data file (`ROUTES_DATA_PATH`).
    pub routes_path: PathBuf,

    /// Path to the stations data file (`STATIONS_DATA_PATH`).
    pub stations_path: PathBuf,

    /// Address the HTTP server binds to (`LISTEN_ADDR`).
    pub listen_addr: SocketAddr,

    /// How often to reload the data files (`DATA_RELOAD_SECS`); zero
    /// disables reloading.
    pub reload_interval: Duration,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            routes_path: require("ROUTES_DATA_PATH")?.into(),
            stations_path: require("STATIONS_DATA_PATH")?.into(),
            listen_addr: parse_listen_addr(std::env::var("LISTEN_ADDR").ok())?,
            reload_interval: parse_reload_interval(std::env::var("DATA_RELOAD_SECS").ok())?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parse_listen_addr(raw: Option<String>) -> Result<SocketAddr, ConfigError> {
    match raw {
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            name: "LISTEN_ADDR",
            value: raw,
        }),
        None => Ok(SocketAddr::from(([127, 0, 0, 1], 3000))),
    }
}

fn parse_reload_interval(raw: Option<String>) -> Result<Duration, ConfigError> {
    match raw {
        Some(raw) => {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::Invalid {
                name: "DATA_RELOAD_SECS",
                value: raw,
            })?;
            Ok(Duration::from_secs(secs))
        }
        None => Ok(Duration::from_secs(300)),
    }
}
