//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::SearchConfig;

/// Directory holding `stations.json` and `transfer_rules.json`.
pub const DATA_DIR_VAR: &str = "METRO_DATA_DIR";

/// Address to listen on, e.g. `127.0.0.1:3000`.
pub const BIND_ADDR_VAR: &str = "METRO_BIND_ADDR";

/// Optional cap on states expanded per route search.
pub const MAX_EXPANSIONS_VAR: &str = "METRO_MAX_EXPANSIONS";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: &'static str,
}

/// Configuration for the HTTP server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_expansions: Option<usize>,
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());

        let bind = lookup(BIND_ADDR_VAR)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse().map_err(|_| ConfigError {
            var: BIND_ADDR_VAR,
            value: bind.clone(),
            reason: "expected host:port",
        })?;

        let max_expansions = match lookup(MAX_EXPANSIONS_VAR).filter(|v| !v.is_empty()) {
            Some(v) => Some(v.parse().map_err(|_| ConfigError {
                var: MAX_EXPANSIONS_VAR,
                value: v.clone(),
                reason: "expected a non-negative integer",
            })?),
            None => None,
        };

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            bind_addr,
            max_expansions,
        })
    }

    /// Planner configuration derived from these settings.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_expansions: self.max_expansions,
            ..SearchConfig::default()
        }
    }
}
