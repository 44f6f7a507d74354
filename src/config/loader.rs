//! Load gateway settings from the process environment.

use crate::config::types::GatewayConfig;
use crate::error::ConfigError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

impl GatewayConfig {
    /// Read settings from environment variables. Call `dotenvy::dotenv()` first to pick up a `.env` file.
    ///
    /// - `TURSO_API_URL` (required): remote endpoint base URL, `http` or `https` only
    /// - `TURSO_API_KEY` (required): bearer token
    /// - `HOST` (default `0.0.0.0`): an IP literal, hostnames such as `localhost` are rejected
    /// - `PORT` (default `3002`)
    /// - `TURSO_TIMEOUT_SECS` (optional): upstream request timeout
    /// - `MAX_BODY_BYTES` (default 65536)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`GatewayConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = required(&lookup, "TURSO_API_URL")?;
        let url = reqwest::Url::parse(&api_url).map_err(|e| ConfigError::Invalid {
            name: "TURSO_API_URL",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                name: "TURSO_API_URL",
                reason: format!("unsupported scheme '{}', expected http or https", url.scheme()),
            });
        }
        let api_key = required(&lookup, "TURSO_API_KEY")?;

        let host: IpAddr = parse_or(&lookup, "HOST", || DEFAULT_HOST.parse().ok()).map_err(|e| match e {
            ConfigError::Invalid { name, reason } => ConfigError::Invalid {
                name,
                reason: format!("{reason}; HOST must be an IP address"),
            },
            other => other,
        })?;
        let port: u16 = parse_or(&lookup, "PORT", || Some(DEFAULT_PORT))?;
        let max_body_bytes: usize = parse_or(&lookup, "MAX_BODY_BYTES", || Some(DEFAULT_MAX_BODY_BYTES))?;
        let request_timeout = match optional(&lookup, "TURSO_TIMEOUT_SECS") {
            Some(v) => Some(Duration::from_secs(parse_value("TURSO_TIMEOUT_SECS", &v)?)),
            None => None,
        };

        Ok(GatewayConfig {
            api_url,
            api_key,
            bind_addr: SocketAddr::new(host, port),
            request_timeout,
            max_body_bytes,
        })
    }
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or(ConfigError::Missing(name))
}

fn parse_value<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
    })
}

fn parse_or<F, T, D>(lookup: &F, name: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    D: FnOnce() -> Option<T>,
{
    match optional(lookup, name) {
        Some(v) => parse_value(name, &v),
        None => default().ok_or_else(|| ConfigError::Invalid {
            name,
            reason: "no default".into(),
        }),
    }
}
