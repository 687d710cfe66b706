//! Geocoding adapter - Implements GeocodingPort using integration_maps

use std::sync::Arc;

use application::{error::ApplicationError, ports::GeocodingPort};
use async_trait::async_trait;
use domain::{Coordinate, ResolvedPlace};
use integration_maps::{GeocodingClient, GoogleMapsClient};
use tracing::instrument;

/// Adapter for forward and reverse geocoding
///
/// Reverse lookups are cached inside the client for the configured TTL.
#[derive(Debug, Clone)]
pub struct GeocodingAdapter {
    client: Arc<GoogleMapsClient>,
}

impl GeocodingAdapter {
    /// Create an adapter over a shared client
    pub const fn new(client: Arc<GoogleMapsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<ResolvedPlace, ApplicationError> {
        let place = self
            .client
            .geocode(address)
            .await
            .map_err(|e| ApplicationError::DetailLookupFailed(e.to_string()))?;
        Ok(ResolvedPlace::new(place.location, place.formatted_address))
    }

    #[instrument(skip(self))]
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<String, ApplicationError> {
        self.client
            .reverse_geocode(coordinate)
            .await
            .map_err(|e| ApplicationError::ReverseGeocodeFailed(e.to_string()))
    }
}
