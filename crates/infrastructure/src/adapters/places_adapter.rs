//! Places adapter - Implements PlacesPort using integration_maps

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{LocationBias, PlacesPort},
};
use async_trait::async_trait;
use domain::{ResolvedPlace, SessionToken, Suggestion};
use integration_maps::{GoogleMapsClient, PlacesClient, SearchBias};
use tracing::{debug, instrument};

/// Adapter for the hosted places autocomplete and detail endpoints
#[derive(Debug, Clone)]
pub struct PlacesAdapter {
    client: Arc<GoogleMapsClient>,
}

impl PlacesAdapter {
    /// Create an adapter over a shared client
    pub const fn new(client: Arc<GoogleMapsClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlacesPort for PlacesAdapter {
    #[instrument(skip(self, text, token))]
    async fn suggest(
        &self,
        text: &str,
        bias: Option<LocationBias>,
        token: SessionToken,
    ) -> Result<Vec<Suggestion>, ApplicationError> {
        let token = token.to_string();
        let bias = bias.map(|b| SearchBias {
            center: b.center,
            radius_meters: b.radius_meters,
        });

        let predictions = self
            .client
            .autocomplete(text, Some(&token), bias)
            .await
            .map_err(|e| ApplicationError::SuggestionQueryFailed(e.to_string()))?;

        debug!(count = predictions.len(), "Mapped predictions");
        Ok(predictions
            .into_iter()
            .map(|p| Suggestion::new(p.description, p.place_id))
            .collect())
    }

    #[instrument(skip(self, token))]
    async fn place_details(
        &self,
        suggestion_id: &str,
        token: SessionToken,
    ) -> Result<ResolvedPlace, ApplicationError> {
        let token = token.to_string();
        let place = self
            .client
            .place_details(suggestion_id, Some(&token))
            .await
            .map_err(|e| ApplicationError::DetailLookupFailed(e.to_string()))?;

        Ok(ResolvedPlace::new(place.location, place.formatted_address))
    }
}
