use anyhow::{anyhow, Result};
use std::env;
use std::time::Duration;

/// Odds proxy in front of The Odds API.
pub const PROXY_BASE_URL: &str = "https://odds-proxy-u4wg.onrender.com";

/// Upper bound on a single league fetch.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub proxy_base_url: String,
    pub request_timeout: Duration,
    pub http_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(v) if !v.trim().is_empty() => v.trim().to_string(),
            Some(_) => return Err(anyhow!("DATABASE_URL is set but empty")),
            None => return Err(anyhow!("DATABASE_URL is not set")),
        };

        Ok(Self {
            database_url,
            proxy_base_url: PROXY_BASE_URL.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            http_port: lookup("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_HTTP_PORT),
        })
    }
}
