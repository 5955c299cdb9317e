//! Map view configuration.

use crate::domain::Coordinate;

use super::style::{StyleRule, phantom_style};

/// Melbourne CBD, Victoria.
pub const MELBOURNE_LAT: f64 = -37.8136;
pub const MELBOURNE_LNG: f64 = 144.9631;

/// Initial view and theme of the map.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Where the map opens, and where the city-centre marker sits.
    pub center: Coordinate,

    /// Initial zoom level.
    pub zoom: u8,

    /// Style rules handed to the map script.
    pub styles: Vec<StyleRule>,
}

impl MapConfig {
    pub fn new(center: Coordinate, zoom: u8, styles: Vec<StyleRule>) -> Self {
        Self {
            center,
            zoom,
            styles,
        }
    }

    /// Central Melbourne at city zoom, in the phantom theme.
    pub fn melbourne() -> Self {
        let center = Coordinate::new(MELBOURNE_LAT, MELBOURNE_LNG)
            .unwrap_or_else(|e| unreachable!("Melbourne is on the map: {e}"));
        Self::new(center, 12, phantom_style())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::melbourne()
    }
}
