//! Forward and reverse geocoding
//!
//! Reverse lookups are cached by coordinate (rounded to 6 decimals) since map
//! clicks and marker drags tend to revisit the same spots.

use async_trait::async_trait;
use domain::Coordinate;
use tracing::{debug, instrument};

use crate::client::{GoogleMapsClient, check_status};
use crate::error::MapsError;
use crate::models::{PlaceResult, RawGeocodeResponse};

const GEOCODE_PATH: &str = "/maps/api/geocode/json";

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form address to a canonical place
    async fn geocode(&self, address: &str) -> Result<PlaceResult, MapsError>;

    /// Convert a coordinate to a human-readable address
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<String, MapsError>;
}

fn cache_key(coordinate: Coordinate) -> (i64, i64) {
    (
        (coordinate.lat() * 1e6).round() as i64,
        (coordinate.lng() * 1e6).round() as i64,
    )
}

impl GoogleMapsClient {
    fn first_place(query: &str, body: RawGeocodeResponse) -> Result<PlaceResult, MapsError> {
        check_status(&body.status, body.error_message)?;
        body.results
            .into_iter()
            .next()
            .map(crate::models::RawPlace::into_place)
            .transpose()?
            .flatten()
            .ok_or_else(|| MapsError::NotFound(query.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for GoogleMapsClient {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<PlaceResult, MapsError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(MapsError::InvalidInput(
                "Address must not be empty".to_string(),
            ));
        }

        let mut params = vec![("address", address.to_string())];
        if !self.config.country.is_empty() {
            params.push(("components", format!("country:{}", self.config.country)));
        }

        let body: RawGeocodeResponse = self.get_json(GEOCODE_PATH, &params).await?;
        let place = Self::first_place(address, body)?;

        debug!(%address, location = %place.location, "Geocoded address");
        Ok(place)
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<String, MapsError> {
        let key = cache_key(coordinate);
        if self.config.caching_enabled() {
            if let Some(address) = self.reverse_cache.get(&key).await {
                debug!(%coordinate, "Reverse geocoding cache hit");
                return Ok(address);
            }
        }

        let params = [("latlng", coordinate.to_query_param())];
        let body: RawGeocodeResponse = self.get_json(GEOCODE_PATH, &params).await?;
        let place = Self::first_place(&coordinate.to_string(), body)?;

        if place.formatted_address.trim().is_empty() {
            return Err(MapsError::NotFound(coordinate.to_string()));
        }

        if self.config.caching_enabled() {
            self.reverse_cache
                .insert(key, place.formatted_address.clone())
                .await;
        }

        Ok(place.formatted_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_rounds() {
        let a = Coordinate::new(-23.550_000_1, -46.63).unwrap();
        let b = Coordinate::new(-23.549_999_9, -46.63).unwrap();
        assert_eq!(cache_key(a), cache_key(b));
    }

    #[test]
    fn test_first_place_zero_results() {
        let raw: RawGeocodeResponse =
            serde_json::from_str(r#"{"status": "ZERO_RESULTS", "results": []}"#).unwrap();
        let err = GoogleMapsClient::first_place("nowhere", raw).unwrap_err();
        assert!(matches!(err, MapsError::NotFound(_)));
    }

    #[test]
    fn test_first_place_takes_first_result() {
        let raw: RawGeocodeResponse = serde_json::from_str(
            r#"{"status": "OK", "results": [
                {"formatted_address": "Praça da Sé, São Paulo", "geometry": {"location": {"lat": -23.5503, "lng": -46.6339}}},
                {"formatted_address": "Other", "geometry": {"location": {"lat": 0.0, "lng": 0.0}}}
            ]}"#,
        )
        .unwrap();
        let place = GoogleMapsClient::first_place("sé", raw).unwrap();
        assert_eq!(place.formatted_address, "Praça da Sé, São Paulo");
    }
}
