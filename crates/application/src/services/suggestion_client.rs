//! Suggestion query client
//!
//! Wraps the places port for typed text. Fails soft: service errors and
//! empty input both yield an empty list, so callers cannot tell "no matches"
//! apart from "service error".

use std::{fmt, sync::Arc};

use domain::{EndpointRole, Suggestion};
use tracing::{debug, instrument, warn};

use super::SessionTokenManager;
use crate::ports::{LocationBias, PlacesPort};

/// Fetches autocomplete suggestions for one endpoint's search session
pub struct SuggestionClient {
    places: Arc<dyn PlacesPort>,
    tokens: Arc<SessionTokenManager>,
}

impl fmt::Debug for SuggestionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionClient")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl SuggestionClient {
    /// Create a client sharing `tokens` with the detail lookups
    pub fn new(places: Arc<dyn PlacesPort>, tokens: Arc<SessionTokenManager>) -> Self {
        Self { places, tokens }
    }

    /// Ordered suggestions for `text` under `role`'s session token
    #[instrument(skip(self, text, bias), fields(text_len = text.len(), biased = bias.is_some()))]
    pub async fn query_suggestions(
        &self,
        role: EndpointRole,
        text: &str,
        bias: Option<LocationBias>,
    ) -> Vec<Suggestion> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        let token = self.tokens.current_token(role);
        match self.places.suggest(text, bias, token).await {
            Ok(suggestions) => {
                debug!(count = suggestions.len(), "Suggestions received");
                suggestions
            },
            Err(e) => {
                warn!(error = %e, "Suggestion query failed, showing no matches");
                Vec::new()
            },
        }
    }
}
