//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::StopRecord;
use crate::map::MapConfig;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    /// Key for the mapping script, if configured
    pub api_key: Option<Arc<str>>,

    /// Map view and theme
    pub map: Arc<MapConfig>,

    /// Deduplicated stations, loaded once at startup
    pub stations: Arc<Vec<StopRecord>>,
}

impl AppState {
    pub fn new(api_key: Option<String>, map: MapConfig, stations: Vec<StopRecord>) -> Self {
        Self {
            api_key: api_key.map(Arc::from),
            map: Arc::new(map),
            stations: Arc::new(stations),
        }
    }
}
