//! Map markers.

use serde::Serialize;

use crate::domain::{Coordinate, StopRecord};

const TRAIN_ICON_URL: &str = "/static/icons/train.png";
const TRAIN_ICON_PX: u32 = 35;
const CITY_ICON_URL: &str = "/static/icons/marker.png";
const CITY_ICON_PX: u32 = 75;
const CITY_TITLE: &str = "Melbourne, Victoria";

/// Pixel dimensions an icon is scaled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn square(px: u32) -> Self {
        Self {
            width: px,
            height: px,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
    pub url: String,
    pub scaled_size: Size,
}

/// A titled, iconed point on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinate,
    pub title: String,
    pub icon: MarkerIcon,
}

impl Marker {
    /// A train icon at a station, titled with its name.
    pub fn station(stop: &StopRecord) -> Self {
        Self {
            position: stop.position(),
            title: stop.name().to_string(),
            icon: MarkerIcon {
                url: TRAIN_ICON_URL.to_string(),
                scaled_size: Size::square(TRAIN_ICON_PX),
            },
        }
    }

    /// The large marker placed on the city centre.
    pub fn city_centre(position: Coordinate) -> Self {
        Self {
            position,
            title: CITY_TITLE.to_string(),
            icon: MarkerIcon {
                url: CITY_ICON_URL.to_string(),
                scaled_size: Size::square(CITY_ICON_PX),
            },
        }
    }
}
