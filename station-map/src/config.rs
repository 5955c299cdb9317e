//! Application configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::stops::{StopClientConfig, StopSource};

pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";
pub const STOPS_SOURCE_VAR: &str = "STOPS_SOURCE";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const STATIC_DIR_VAR: &str = "STATIC_DIR";
pub const STOPS_TIMEOUT_VAR: &str = "STOPS_TIMEOUT_SECS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";

/// Errors from reading configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Key for the mapping script. The page renders without a map when unset.
    pub api_key: Option<String>,

    /// Where `stops.txt` is read from
    pub stops_source: StopSource,

    pub stop_client: StopClientConfig,

    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,

    /// Directory served under `/static` (marker icons)
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset and blank variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = get(API_KEY_VAR);

        let stops_source = get(STOPS_SOURCE_VAR)
            .map(|s| StopSource::parse(&s))
            .unwrap_or_default();

        let bind_addr = get(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                var: BIND_ADDR_VAR,
                value: bind_addr.clone(),
                reason: e.to_string(),
            })?;

        let stop_client = match get(STOPS_TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidValue {
                        var: STOPS_TIMEOUT_VAR,
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
                StopClientConfig::new(secs)
            }
            None => StopClientConfig::default(),
        };

        let static_dir = PathBuf::from(
            get(STATIC_DIR_VAR).unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
        );

        Ok(Self {
            api_key,
            stops_source,
            stop_client,
            bind_addr,
            static_dir,
        })
    }
}
