//! Parsing of GTFS `stops.txt` text into stop records.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::domain::{Coordinate, StopRecord};

use super::error::RowError;

/// Positions of the columns we read, in the layout the feed ships with.
const DEFAULT_COLUMNS: Columns = Columns {
    id: 0,
    name: 1,
    lat: 2,
    lon: 3,
};

/// Result of parsing a stops file: good records plus the rows left out.
#[derive(Debug, Default)]
pub struct ParsedStops {
    pub records: Vec<StopRecord>,
    pub skipped: Vec<RowError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    id: usize,
    name: usize,
    lat: usize,
    lon: usize,
}

impl Columns {
    /// Locate columns by header name, falling back to the default layout
    /// unless every column is named.
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);

        match (
            find("stop_id"),
            find("stop_name"),
            find("stop_lat"),
            find("stop_lon"),
        ) {
            (Some(id), Some(name), Some(lat), Some(lon)) => Self { id, name, lat, lon },
            _ => DEFAULT_COLUMNS,
        }
    }
}

/// Parse comma-separated stop rows.
///
/// The first row is a header and is used to find the `stop_id`,
/// `stop_name`, `stop_lat` and `stop_lon` columns. Fields may be wrapped
/// in double quotes and surrounding whitespace is ignored. Blank lines are
/// skipped. Rows with a missing id or unusable coordinates are left out
/// and reported in [`ParsedStops::skipped`]; parsing itself never fails.
pub fn parse_stops(text: &str) -> ParsedStops {
    let text = text.trim_start_matches('\u{feff}');

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let columns = match reader.headers() {
        Ok(headers) => Columns::from_headers(headers),
        Err(_) => DEFAULT_COLUMNS,
    };

    let mut parsed = ParsedStops::default();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                parsed.skipped.push(RowError {
                    line: e.position().map_or(0, |p| p.line()),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        // A whitespace-only line trims to a single empty field
        if record.len() <= 1 && record.iter().all(str::is_empty) {
            continue;
        }

        match parse_row(&record, columns) {
            Ok(stop) => parsed.records.push(stop),
            Err(reason) => parsed.skipped.push(RowError {
                line: record.position().map_or(0, |p| p.line()),
                reason,
            }),
        }
    }

    parsed
}

fn parse_row(record: &StringRecord, columns: Columns) -> Result<StopRecord, String> {
    let field = |idx: usize, name: &str| {
        record
            .get(idx)
            .ok_or_else(|| format!("missing {name}"))
    };
    let number = |idx: usize, name: &str| -> Result<f64, String> {
        let raw = field(idx, name)?;
        raw.parse::<f64>()
            .map_err(|_| format!("{name} is not a number: {raw:?}"))
    };

    let id = field(columns.id, "stop_id")?;
    if id.is_empty() {
        return Err("empty stop_id".to_string());
    }
    let name = field(columns.name, "stop_name")?;
    let lat = number(columns.lat, "stop_lat")?;
    let lon = number(columns.lon, "stop_lon")?;

    let position = Coordinate::new(lat, lon).map_err(|e| e.to_string())?;

    Ok(StopRecord::new(id, name, position))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quoted_rows() {
        let text = "\
\"stop_id\",\"stop_name\",\"stop_lat\",\"stop_lon\"
\"19854\",\"Flinders Street Railway Station\",\"-37.8183\",\"144.9671\"
\"19842\",\"Richmond Railway Station\",\"-37.8240\",\"144.9901\"
";
        let parsed = parse_stops(text);

        assert!(parsed.skipped.is_empty());
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].id(), "19854");
        assert_eq!(parsed.records[0].name(), "Flinders Street Railway Station");
        assert_eq!(parsed.records[0].lat(), -37.8183);
        assert_eq!(parsed.records[0].lon(), 144.9671);
        assert_eq!(parsed.records[1].name(), "Richmond Railway Station");
    }

    #[test]
    fn parses_unquoted_rows_with_whitespace() {
        let text = "stop_id,stop_name,stop_lat,stop_lon\n 1 , Richmond ,-37.82, 144.99\n";
        let parsed = parse_stops(text);

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].id(), "1");
        assert_eq!(parsed.records[0].name(), "Richmond");
    }

    #[test]
    fn quoted_name_may_contain_comma() {
        let text = "stop_id,stop_name,stop_lat,stop_lon\n1,\"Flinders St, Platform 1\",-37.8,144.9\n";
        let parsed = parse_stops(text);

        assert_eq!(parsed.records[0].name(), "Flinders St, Platform 1");
    }

    #[test]
    fn finds_columns_by_header() {
        let text = "\
stop_name,stop_lon,stop_id,stop_lat,location_type
Southern Cross,144.9525,22180,-37.8184,1
";
        let parsed = parse_stops(text);

        assert!(parsed.skipped.is_empty());
        let stop = &parsed.records[0];
        assert_eq!(stop.id(), "22180");
        assert_eq!(stop.name(), "Southern Cross");
        assert_eq!(stop.lat(), -37.8184);
        assert_eq!(stop.lon(), 144.9525);
    }

    #[test]
    fn unnamed_header_falls_back_to_position() {
        let text = "id,label,y,x\n7,Parliament,-37.811,144.973\n";
        let parsed = parse_stops(text);

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].id(), "7");
        assert_eq!(parsed.records[0].name(), "Parliament");
    }

    #[test]
    fn skips_blank_lines() {
        let text = "stop_id,stop_name,stop_lat,stop_lon\n\n1,Richmond,-37.82,144.99\n   \n\n2,Parliament,-37.81,144.97\n";
        let parsed = parse_stops(text);

        assert_eq!(parsed.records.len(), 2);
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn strips_byte_order_mark() {
        let text = "\u{feff}stop_id,stop_name,stop_lat,stop_lon\n1,Richmond,-37.82,144.99\n";
        let parsed = parse_stops(text);

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].id(), "1");
    }

    #[test]
    fn malformed_rows_are_skipped_with_line_numbers() {
        let text = "\
stop_id,stop_name,stop_lat,stop_lon
1,Richmond,-37.82,144.99
2,Nowhere,north,144.99
3,Short Row
,No Id,-37.8,144.9
4,Off The Map,-95.0,144.9
5,Parliament,-37.81,144.97
";
        let parsed = parse_stops(text);

        let ids: Vec<&str> = parsed.records.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["1", "5"]);

        let lines: Vec<u64> = parsed.skipped.iter().map(|e| e.line).collect();
        assert_eq!(lines, [3, 4, 5, 6]);
        assert_eq!(
            parsed.skipped[0].reason,
            "stop_lat is not a number: \"north\""
        );
        assert_eq!(parsed.skipped[1].reason, "missing stop_lat");
        assert_eq!(parsed.skipped[2].reason, "empty stop_id");
    }

    #[test]
    fn delimiter_only_row_is_reported() {
        let text = "stop_id,stop_name,stop_lat,stop_lon\n,,,\n1,Richmond,-37.82,144.99\n";
        let parsed = parse_stops(text);

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(
            parsed.skipped,
            vec![RowError {
                line: 2,
                reason: "empty stop_id".to_string(),
            }]
        );
    }

    #[test]
    fn empty_name_is_kept() {
        let text = "stop_id,stop_name,stop_lat,stop_lon\n1,,-37.82,144.99\n";
        let parsed = parse_stops(text);

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].name(), "");
    }

    #[test]
    fn empty_text() {
        let parsed = parse_stops("");
        assert!(parsed.records.is_empty());
        assert!(parsed.skipped.is_empty());

        let parsed = parse_stops("stop_id,stop_name,stop_lat,stop_lon\n");
        assert!(parsed.records.is_empty());
    }
}
