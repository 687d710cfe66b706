//! Places autocomplete and place details

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::client::{GoogleMapsClient, check_status};
use crate::error::MapsError;
use crate::models::{
    PlacePrediction, PlaceResult, RawAutocompleteResponse, RawDetailsResponse, SearchBias,
};

const AUTOCOMPLETE_PATH: &str = "/maps/api/place/autocomplete/json";
const DETAILS_PATH: &str = "/maps/api/place/details/json";

/// Trait for place suggestion and detail lookups
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Ordered predictions for partial input text
    ///
    /// `ZERO_RESULTS` yields an empty list; other non-OK statuses are errors.
    async fn autocomplete(
        &self,
        input: &str,
        session_token: Option<&str>,
        bias: Option<SearchBias>,
    ) -> Result<Vec<PlacePrediction>, MapsError>;

    /// Canonical address and position for a prediction's place id
    async fn place_details(
        &self,
        place_id: &str,
        session_token: Option<&str>,
    ) -> Result<PlaceResult, MapsError>;
}

impl GoogleMapsClient {
    /// Query parameters for an autocomplete request
    fn autocomplete_params(
        &self,
        input: &str,
        session_token: Option<&str>,
        bias: Option<SearchBias>,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![("input", input.to_string())];

        if let Some(token) = session_token {
            params.push(("sessiontoken", token.to_string()));
        }

        if !self.config.country.is_empty() {
            params.push(("components", format!("country:{}", self.config.country)));
        }

        if let Some(bias) = bias {
            params.push(("location", bias.center.to_query_param()));
            params.push(("radius", bias.radius_meters.to_string()));
        }

        params
    }

    fn parse_autocomplete_response(body: RawAutocompleteResponse) -> Result<Vec<PlacePrediction>, MapsError> {
        check_status(&body.status, body.error_message)?;
        Ok(body
            .predictions
            .into_iter()
            .map(|p| PlacePrediction {
                description: p.description,
                place_id: p.place_id,
            })
            .collect())
    }

    fn parse_details_response(
        place_id: &str,
        body: RawDetailsResponse,
    ) -> Result<PlaceResult, MapsError> {
        check_status(&body.status, body.error_message)?;
        body.result
            .map(crate::models::RawPlace::into_place)
            .transpose()?
            .flatten()
            .ok_or_else(|| MapsError::NotFound(format!("place {place_id}")))
    }
}

#[async_trait]
impl PlacesClient for GoogleMapsClient {
    #[instrument(skip(self, session_token, bias))]
    async fn autocomplete(
        &self,
        input: &str,
        session_token: Option<&str>,
        bias: Option<SearchBias>,
    ) -> Result<Vec<PlacePrediction>, MapsError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(MapsError::InvalidInput(
                "Autocomplete input must not be empty".to_string(),
            ));
        }

        let params = self.autocomplete_params(input, session_token, bias);
        let body: RawAutocompleteResponse = self.get_json(AUTOCOMPLETE_PATH, &params).await?;
        let predictions = Self::parse_autocomplete_response(body)?;

        debug!(count = predictions.len(), "Autocomplete predictions");
        Ok(predictions)
    }

    #[instrument(skip(self, session_token))]
    async fn place_details(
        &self,
        place_id: &str,
        session_token: Option<&str>,
    ) -> Result<PlaceResult, MapsError> {
        if place_id.trim().is_empty() {
            return Err(MapsError::InvalidInput(
                "Place id must not be empty".to_string(),
            ));
        }

        let mut params = vec![
            ("place_id", place_id.to_string()),
            ("fields", "formatted_address,geometry".to_string()),
        ];
        if let Some(token) = session_token {
            params.push(("sessiontoken", token.to_string()));
        }

        let body: RawDetailsResponse = self.get_json(DETAILS_PATH, &params).await?;
        Self::parse_details_response(place_id, body)
    }
}
