//! Map web service data models
//!
//! Typed results handed to callers plus the raw JSON shapes returned by the
//! places, geocoding and directions endpoints.

use domain::Coordinate;
use serde::{Deserialize, Serialize};

use crate::error::MapsError;

/// Geographic narrowing applied to autocomplete queries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchBias {
    /// Centre of the bias circle
    pub center: Coordinate,
    /// Radius of the bias circle in meters
    pub radius_meters: u32,
}

/// One autocomplete prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacePrediction {
    /// Full description, e.g. "Avenida Paulista, São Paulo - SP, Brasil"
    pub description: String,
    /// Opaque place identifier for the detail lookup
    pub place_id: String,
}

/// A place with canonical address and position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    /// Canonical formatted address (may be empty if the service omits it)
    pub formatted_address: String,
    /// Position of the place
    pub location: Coordinate,
}

/// One leg of a driving route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsLeg {
    /// Start of the leg snapped to the road network
    pub start: Coordinate,
    /// End of the leg snapped to the road network
    pub end: Coordinate,
    /// Distance in meters
    pub distance_meters: u64,
    /// Duration in seconds
    pub duration_seconds: Option<u64>,
}

/// A driving route as returned by the directions endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    /// Decoded overview polyline
    pub path: Vec<Coordinate>,
    /// Legs in travel order
    pub legs: Vec<DirectionsLeg>,
    /// South-west and north-east corners reported by the service
    pub bounds: Option<(Coordinate, Coordinate)>,
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
pub(crate) struct RawAutocompleteResponse {
    pub status: String,
    #[serde(default)]
    pub predictions: Vec<RawPrediction>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPrediction {
    pub description: String,
    pub place_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDetailsResponse {
    pub status: String,
    pub result: Option<RawPlace>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<RawPlace>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPlace {
    pub formatted_address: Option<String>,
    pub geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGeometry {
    pub location: RawLatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RawLatLng {
    pub lat: f64,
    pub lng: f64,
}

impl RawLatLng {
    pub(crate) fn to_coordinate(self) -> Result<Coordinate, MapsError> {
        Coordinate::new(self.lat, self.lng).map_err(|e| MapsError::ParseError(e.to_string()))
    }
}

impl RawPlace {
    /// Convert to a typed place; `None` when the service returned no geometry
    pub(crate) fn into_place(self) -> Result<Option<PlaceResult>, MapsError> {
        let Some(geometry) = self.geometry else {
            return Ok(None);
        };
        Ok(Some(PlaceResult {
            formatted_address: self.formatted_address.unwrap_or_default(),
            location: geometry.location.to_coordinate()?,
        }))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub routes: Vec<RawRoute>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawRoute {
    #[serde(default)]
    pub legs: Vec<RawLeg>,
    pub overview_polyline: Option<RawPolyline>,
    pub bounds: Option<RawBounds>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPolyline {
    pub points: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawBounds {
    pub northeast: RawLatLng,
    pub southwest: RawLatLng,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLeg {
    pub distance: Option<RawTextValue>,
    pub duration: Option<RawTextValue>,
    pub start_location: RawLatLng,
    pub end_location: RawLatLng,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTextValue {
    pub value: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_place_without_geometry() {
        let json = r#"{"formatted_address": "Somewhere"}"#;
        let raw: RawPlace = serde_json::from_str(json).unwrap();
        assert!(raw.into_place().unwrap().is_none());
    }

    #[test]
    fn test_raw_place_with_geometry() {
        let json = r#"{
            "formatted_address": "Av. Paulista, 1578 - Bela Vista, São Paulo - SP",
            "geometry": { "location": { "lat": -23.5614, "lng": -46.6559 } }
        }"#;
        let raw: RawPlace = serde_json::from_str(json).unwrap();
        let place = raw.into_place().unwrap().unwrap();
        assert!(place.formatted_address.starts_with("Av. Paulista"));
        assert!((place.location.lat() + 23.5614).abs() < 1e-9);
    }

    #[test]
    fn test_raw_place_invalid_coordinate() {
        let json = r#"{"geometry": { "location": { "lat": 123.0, "lng": 0.0 } }}"#;
        let raw: RawPlace = serde_json::from_str(json).unwrap();
        assert!(raw.into_place().is_err());
    }

    #[test]
    fn test_autocomplete_missing_predictions_defaults_empty() {
        let raw: RawAutocompleteResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS"}"#).unwrap();
        assert!(raw.predictions.is_empty());
    }
}
