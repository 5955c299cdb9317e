//! Data transfer objects for web responses.

use serde::Serialize;

use crate::domain::Coordinate;
use crate::map::{MapConfig, Marker, StyleRule};

/// Map view, theme and the city-centre marker.
#[derive(Debug, Serialize)]
pub struct MapResponse {
    pub center: Coordinate,
    pub zoom: u8,
    pub styles: Vec<StyleRule>,
    pub centre_marker: Marker,
}

impl MapResponse {
    pub fn from_config(config: &MapConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
            styles: config.styles.clone(),
            centre_marker: Marker::city_centre(config.center),
        }
    }
}

/// One marker per deduplicated station.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<Marker>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
