use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_LIVE_BASE_URL: &str = "https://cdn.nba.com/static/json/liveData";
pub const DEFAULT_STATS_BASE_URL: &str = "https://stats.nba.com/stats";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOST is not in the correct format: {0}")]
    InvalidHost(String),
    #[error("PORT is not the correct format: {0}")]
    InvalidPort(String),
}

/// Process startup parameters, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub debug: bool,
    pub live_base_url: String,
    pub stats_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let debug = lookup("DEBUG")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        let live_base_url = lookup("NBA_LIVE_BASE_URL")
            .unwrap_or_else(|| DEFAULT_LIVE_BASE_URL.to_string());
        let stats_base_url = lookup("NBA_STATS_BASE_URL")
            .unwrap_or_else(|| DEFAULT_STATS_BASE_URL.to_string());

        Ok(Config {
            host,
            port,
            debug,
            live_base_url: live_base_url.trim_end_matches('/').to_string(),
            stats_base_url: stats_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Default tracing filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}
