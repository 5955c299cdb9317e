//! Transit stop data loading.
//!
//! Reads a GTFS `stops.txt` once at startup, from disk or over HTTP,
//! parses it into [`StopRecord`]s and reduces them to one record per
//! station.

mod client;
mod error;
mod parse;
#[cfg(test)]
mod test_support;

pub use client::{DEFAULT_STOPS_PATH, StopClientConfig, StopSource, load_stops_text};
pub use error::{RowError, StopsError};
pub use parse::{ParsedStops, parse_stops};

use tracing::{error, info, warn};

use crate::dedup::dedup_stations;
use crate::domain::StopRecord;

/// Load, parse and deduplicate the station list.
///
/// A failed load is logged and yields no stations, so the map still
/// renders without station markers.
pub async fn fetch_stations(source: &StopSource, config: &StopClientConfig) -> Vec<StopRecord> {
    let text = match load_stops_text(source, config).await {
        Ok(text) => text,
        Err(e) => {
            error!(%source, "failed to load station data: {e}");
            return Vec::new();
        }
    };

    let parsed = parse_stops(&text);
    for row in &parsed.skipped {
        warn!(%source, "skipping stop row: {row}");
    }

    let parsed_count = parsed.records.len();
    let stations = dedup_stations(parsed.records);
    info!(
        %source,
        parsed = parsed_count,
        skipped = parsed.skipped.len(),
        stations = stations.len(),
        "loaded station data"
    );

    stations
}
