//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::PlannerConfig;

/// Default dataset location.
const DEFAULT_DATA_PATH: &str = "data/metro_network.csv";

/// Default map image location.
const DEFAULT_MAP_PATH: &str = "data/metro_map.png";

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Error returned when an environment variable holds an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {key}: {value:?} ({reason})")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: &'static str,
}

/// Configuration for the web server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Path to the network dataset (CSV).
    pub data_path: PathBuf,

    /// Path to the static map image.
    pub map_path: PathBuf,

    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Route planner settings.
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Recognised variables: `METRO_DATA_PATH`, `METRO_MAP_PATH`,
    /// `METRO_BIND_ADDR` and `METRO_MINUTES_PER_STOP`. Unset variables
    /// take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_path = lookup("METRO_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let map_path = lookup("METRO_MAP_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MAP_PATH));

        let bind_addr = match lookup("METRO_BIND_ADDR") {
            Some(value) => value.parse().map_err(|_| ConfigError {
                key: "METRO_BIND_ADDR",
                value,
                reason: "expected host:port",
            })?,
            None => DEFAULT_BIND_ADDR.parse().map_err(|_| ConfigError {
                key: "METRO_BIND_ADDR",
                value: DEFAULT_BIND_ADDR.to_string(),
                reason: "expected host:port",
            })?,
        };

        let mut planner = PlannerConfig::default();
        if let Some(value) = lookup("METRO_MINUTES_PER_STOP") {
            planner.minutes_per_stop = match value.trim().parse::<i64>() {
                Ok(mins) if mins >= 0 => mins,
                _ => {
                    return Err(ConfigError {
                        key: "METRO_MINUTES_PER_STOP",
                        value,
                        reason: "expected a non-negative whole number",
                    });
                }
            };
        }

        Ok(Self {
            data_path,
            map_path,
            bind_addr,
            planner,
        })
    }
}
