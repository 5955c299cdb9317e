//! Domain types for the station map.
//!
//! Stop records and coordinates are validated when they are built, so the
//! deduper and the map layer can trust every value they receive.

mod coordinate;
mod stop;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use stop::StopRecord;
