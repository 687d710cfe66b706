//! Shared HTTP client for the map web services
//!
//! One [`GoogleMapsClient`] holds the connection pool, the API key and the
//! reverse geocoding cache. The endpoint traits ([`crate::PlacesClient`],
//! [`crate::GeocodingClient`], [`crate::DirectionsClient`]) are implemented
//! for it in their own modules.

use std::time::Duration;

use moka::future::Cache;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::MapsConfig;
use crate::error::MapsError;

/// HTTP client for the hosted places, geocoding and directions endpoints
#[derive(Debug)]
pub struct GoogleMapsClient {
    client: Client,
    pub(crate) config: MapsConfig,
    pub(crate) reverse_cache: Cache<(i64, i64), String>,
}

impl GoogleMapsClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &MapsConfig) -> Result<Self, MapsError> {
        config.validate().map_err(MapsError::InvalidInput)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("MoveRoute/0.2")
            .build()
            .map_err(|e| MapsError::ConnectionFailed(e.to_string()))?;

        let cache_ttl = if config.caching_enabled() {
            Duration::from_secs(config.cache_ttl_minutes * 60)
        } else {
            Duration::from_secs(1) // Minimal TTL when "disabled"
        };

        let reverse_cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(cache_ttl)
            .build();

        Ok(Self {
            client,
            config: config.clone(),
            reverse_cache,
        })
    }

    /// Access the configuration
    #[must_use]
    pub const fn config(&self) -> &MapsConfig {
        &self.config
    }

    /// Issue a GET against `path` with `params` plus the API key and language,
    /// and decode the JSON body
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, MapsError> {
        let url = format!("{}{path}", self.config.base_url);

        let mut query: Vec<(&str, String)> = params.to_vec();
        query.push(("key", self.config.api_key.clone()));
        if !self.config.language.is_empty() {
            query.push(("language", self.config.language.clone()));
        }

        debug!(%url, "Calling map web service");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MapsError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    MapsError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MapsError::RateLimitExceeded);
        }

        if !status.is_success() {
            return Err(MapsError::RequestFailed(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MapsError::ParseError(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| MapsError::ParseError(e.to_string()))
    }
}

/// Reject any API status other than `OK` or `ZERO_RESULTS`
pub(crate) fn check_status(status: &str, message: Option<String>) -> Result<(), MapsError> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(MapsError::from_status(other, message)),
    }
}
