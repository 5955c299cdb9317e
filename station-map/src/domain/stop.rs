//! Transit stop records.

use serde::Serialize;

use super::Coordinate;

/// One parsed row of transit-stop data.
///
/// Records are immutable once parsed. `id` is unique per source row; `name`
/// is free text and compared case-insensitively by the deduper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopRecord {
    id: String,
    name: String,
    position: Coordinate,
}

impl StopRecord {
    /// Create a stop record at a validated position.
    pub fn new(id: impl Into<String>, name: impl Into<String>, position: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
        }
    }

    /// The source row's `stop_id`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The raw `stop_name`, as written in the source.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn lat(&self) -> f64 {
        self.position.lat()
    }

    pub fn lon(&self) -> f64 {
        self.position.lng()
    }
}
