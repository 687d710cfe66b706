//! Geographic coordinate value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A WGS84 coordinate with latitude and longitude in degrees
///
/// Construction through [`Coordinate::new`] (and deserialization) guarantees
/// `lat` in [-90, 90] and `lng` in [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = DomainError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.lat, raw.lng)
    }
}

impl Coordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` if latitude is not in [-90, 90],
    /// longitude is not in [-180, 180], or either value is not finite.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::invalid_coordinate(lat, lng));
        }
        Ok(Self { lat, lng })
    }

    /// Create a coordinate without validation (for trusted constants)
    #[must_use]
    pub const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Get the latitude
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Get the longitude
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }

    /// Format as the comma-separated pair used by map web services (`"lat,lng"`)
    #[must_use]
    pub fn to_query_param(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }

    /// São Paulo city centre, the default map centre
    #[must_use]
    pub const fn sao_paulo() -> Self {
        Self::new_unchecked(-23.550_52, -46.633_308)
    }
}

/// Renders the fallback address form, e.g. `-23.550000, -46.630000`
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_coordinate() {
        let c = Coordinate::new(-23.55, -46.63).unwrap();
        assert!((c.lat() + 23.55).abs() < f64::EPSILON);
        assert!((c.lng() + 46.63).abs() < f64::EPSILON);
    }

    #[test]
    fn boundary_coordinates() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(Coordinate::new(90.5, 0.0).is_err());
        assert!(Coordinate::new(0.0, -180.5).is_err());
    }

    #[test]
    fn nan_rejected() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn display_is_fixed_precision_pair() {
        let c = Coordinate::new(-23.55, -46.63).unwrap();
        assert_eq!(c.to_string(), "-23.550000, -46.630000");
    }

    #[test]
    fn query_param_has_no_space() {
        let c = Coordinate::new(-23.55, -46.63).unwrap();
        assert_eq!(c.to_query_param(), "-23.55,-46.63");
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<Coordinate, _> = serde_json::from_str(r#"{"lat": 1.0, "lng": 2.0}"#);
        assert!(ok.is_ok());
        let bad: Result<Coordinate, _> = serde_json::from_str(r#"{"lat": 100.0, "lng": 2.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn serializes_lat_lng_fields() {
        let c = Coordinate::new(1.5, 2.5).unwrap();
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["lat"], 1.5);
        assert_eq!(json["lng"], 2.5);
    }
}
