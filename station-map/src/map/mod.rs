//! What the browser map shows: view, theme and markers.

mod config;
mod marker;
mod style;

pub use config::{MELBOURNE_LAT, MELBOURNE_LNG, MapConfig};
pub use marker::{Marker, MarkerIcon, Size};
pub use style::{StyleRule, Styler, Visibility, phantom_style};
