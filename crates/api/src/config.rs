//! Process configuration, read from environment variables.
//!
//! - `BIND_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `SEED_CATALOG`: start with the default produce (default `true`)
//! - `LOG_FORMAT`: `json` or `pretty` (default `json`)

use std::net::SocketAddr;

use anyhow::{Context, anyhow};

use supermarket_observability::LogFormat;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub seed_catalog: bool,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed_catalog: true,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (environment, test map, ...).
    ///
    /// Unset keys fall back to defaults; set-but-invalid values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("invalid BIND_ADDR '{bind_addr}'"))?;

        let seed_catalog = match lookup("SEED_CATALOG") {
            Some(v) => v
                .trim()
                .parse::<bool>()
                .with_context(|| format!("invalid SEED_CATALOG '{v}' (expected true or false)"))?,
            None => true,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(v) => v.parse::<LogFormat>().map_err(|e| anyhow!(e))?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            seed_catalog,
            log_format,
        })
    }
}
