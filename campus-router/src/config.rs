//! Process configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Listen address when `CAMPUS_ROUTER_ADDR` is unset.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Static asset directory when `CAMPUS_ROUTER_STATIC_DIR` is unset.
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value {value:?} for {name}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Graph file to load; the built-in campus graph is used when absent.
    pub graph_path: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, treating empty values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let addr_raw = get("CAMPUS_ROUTER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "CAMPUS_ROUTER_ADDR",
                value: addr_raw.clone(),
                reason: e.to_string(),
            })?;

        let static_dir = get("CAMPUS_ROUTER_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let graph_path = get("CAMPUS_ROUTER_GRAPH").map(PathBuf::from);

        Ok(Self {
            addr,
            static_dir,
            graph_path,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            graph_path: None,
        }
    }
}
