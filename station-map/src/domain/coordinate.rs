//! Geographic coordinate type.

use std::fmt;

use serde::Serialize;

/// Error returned when constructing an out-of-range coordinate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lat}, {lng}): {reason}")]
pub struct InvalidCoordinate {
    lat: f64,
    lng: f64,
    reason: &'static str,
}

/// A WGS84 latitude/longitude pair.
///
/// Both components are finite, latitude lies in `[-90, 90]` and longitude
/// in `[-180, 180]`. Any `Coordinate` value is valid by construction.
///
/// Serializes as `{"lat": .., "lng": ..}`, the literal shape the mapping
/// script accepts for positions and centres.
///
/// # Examples
///
/// ```
/// use station_map::domain::Coordinate;
///
/// let melbourne = Coordinate::new(-37.8136, 144.9631).unwrap();
/// assert_eq!(melbourne.lat(), -37.8136);
///
/// assert!(Coordinate::new(-91.0, 0.0).is_err());
/// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> Result<Self, InvalidCoordinate> {
        let reject = |reason| Err(InvalidCoordinate { lat, lng, reason });

        if !lat.is_finite() || !lng.is_finite() {
            return reject("must be finite");
        }
        if !(-90.0..=90.0).contains(&lat) {
            return reject("latitude must be within [-90, 90]");
        }
        if !(-180.0..=180.0).contains(&lng) {
            return reject("longitude must be within [-180, 180]");
        }

        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_range() {
        assert!(Coordinate::new(0.0, 0.0).is_ok());
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(-37.8183, 144.9671).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Coordinate::new(90.5, 0.0).is_err());
        assert!(Coordinate::new(-90.5, 0.0).is_err());
        assert!(Coordinate::new(0.0, 180.5).is_err());
        assert!(Coordinate::new(0.0, -180.5).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
        assert!(Coordinate::new(f64::NEG_INFINITY, 0.0).is_err());
    }

    #[test]
    fn error_message_names_reason() {
        let err = Coordinate::new(100.0, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinate (100, 0): latitude must be within [-90, 90]"
        );
    }

    #[test]
    fn serializes_as_lat_lng_literal() {
        let c = Coordinate::new(-37.8136, 144.9631).unwrap();
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json, serde_json::json!({"lat": -37.8136, "lng": 144.9631}));
    }

    #[test]
    fn debug_and_display() {
        let c = Coordinate::new(-37.8, 144.9).unwrap();
        assert_eq!(format!("{:?}", c), "Coordinate(-37.8, 144.9)");
        assert_eq!(format!("{}", c), "-37.8000, 144.9000");
    }
}
