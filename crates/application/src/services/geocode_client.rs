//! Geocode and reverse-geocode client
//!
//! Detail lookups and forward geocodes fail with `DetailLookupFailed` and
//! leave endpoint state alone. Reverse geocoding never fails: the coordinate
//! is authoritative, so a failed lookup falls back to its numeric rendering.

use std::{fmt, sync::Arc};

use domain::{Coordinate, EndpointRole, ResolvedPlace, Suggestion};
use tracing::{debug, instrument, warn};

use super::SessionTokenManager;
use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, PlacesPort},
};

/// Resolves suggestions, typed addresses and raw coordinates to places
pub struct GeocodeClient {
    places: Arc<dyn PlacesPort>,
    geocoding: Arc<dyn GeocodingPort>,
    tokens: Arc<SessionTokenManager>,
}

impl fmt::Debug for GeocodeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeocodeClient").finish_non_exhaustive()
    }
}

fn lookup_failed(e: ApplicationError) -> ApplicationError {
    match e {
        ApplicationError::DetailLookupFailed(_) => e,
        other => ApplicationError::DetailLookupFailed(other.to_string()),
    }
}

impl GeocodeClient {
    /// Create a client sharing `tokens` with the suggestion queries
    pub fn new(
        places: Arc<dyn PlacesPort>,
        geocoding: Arc<dyn GeocodingPort>,
        tokens: Arc<SessionTokenManager>,
    ) -> Self {
        Self {
            places,
            geocoding,
            tokens,
        }
    }

    /// Resolve a picked suggestion with `role`'s current session token
    ///
    /// The token is not rotated here; that happens when the selection commits.
    #[instrument(skip(self, suggestion), fields(id = %suggestion.id))]
    pub async fn resolve_suggestion(
        &self,
        role: EndpointRole,
        suggestion: &Suggestion,
    ) -> Result<ResolvedPlace, ApplicationError> {
        if suggestion.id.trim().is_empty() {
            return Err(ApplicationError::DetailLookupFailed(
                "suggestion has no place id".to_string(),
            ));
        }

        let token = self.tokens.current_token(role);
        let place = self
            .places
            .place_details(&suggestion.id, token)
            .await
            .map_err(lookup_failed)?;
        debug!(address = %place.address, "Suggestion resolved");
        Ok(place)
    }

    /// Address for a coordinate, falling back to `"lat, lng"`
    #[instrument(skip(self))]
    pub async fn reverse_geocode(&self, coordinate: Coordinate) -> ResolvedPlace {
        match self.geocoding.reverse_geocode(coordinate).await {
            Ok(address) => ResolvedPlace::new(coordinate, address),
            Err(e) => {
                warn!(error = %e, "Reverse geocoding failed, using coordinate as address");
                ResolvedPlace::from_coordinate(coordinate)
            },
        }
    }

    /// Resolve free-typed text without going through a suggestion
    #[instrument(skip(self, address), fields(address_len = address.len()))]
    pub async fn geocode_address(&self, address: &str) -> Result<ResolvedPlace, ApplicationError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ApplicationError::DetailLookupFailed(
                "address is empty".to_string(),
            ));
        }
        self.geocoding.geocode(address).await.map_err(lookup_failed)
    }
}
