//! Server configuration parsed from environment variables.
//!
//! - `PORT`: listen port, default 3000
//! - `PUBLIC_ORIGIN`: scheme + host used for the canonical URL and JSON-LD,
//!   default `http://localhost:{PORT}`
//! - `ASSETS_DIR`: directory served at `/assets`, default `<site root>/assets`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("PUBLIC_ORIGIN must be an http(s) origin, got {0:?}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub public_origin: String,
    pub assets_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Build config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let public_origin = match lookup("PUBLIC_ORIGIN") {
            Some(raw) => parse_origin(&raw)?,
            None => format!("http://localhost:{port}"),
        };
        let assets_dir = lookup("ASSETS_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { port, public_origin, assets_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_origin(raw: &str) -> Result<String, ConfigError> {
    let origin = raw.trim().trim_end_matches('/');
    let host = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() && !host.contains('/') => Ok(origin.to_owned()),
        _ => Err(ConfigError::InvalidOrigin(raw.to_owned())),
    }
}
