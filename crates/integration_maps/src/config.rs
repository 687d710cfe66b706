//! Map web service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the hosted map web services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    /// Base URL of the web service API (paths like `/maps/api/geocode/json` are appended)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Response language (e.g., "pt-BR")
    #[serde(default = "default_language")]
    pub language: String,

    /// ISO 3166-1 alpha-2 country restriction for suggestions (empty to disable)
    #[serde(default = "default_country")]
    pub country: String,

    /// Reverse geocoding cache TTL in minutes (0 to disable)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,
}

fn default_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "pt-BR".to_string()
}

fn default_country() -> String {
    "br".to_string()
}

const fn default_cache_ttl_minutes() -> u64 {
    60
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
            language: default_language(),
            country: default_country(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl MapsConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            cache_ttl_minutes: 0,
            ..Default::default()
        }
    }

    /// Check if reverse geocoding results are cached
    #[must_use]
    pub const fn caching_enabled(&self) -> bool {
        self.cache_ttl_minutes > 0
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.api_key.trim().is_empty() {
            return Err("api_key must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if !self.country.is_empty() && self.country.len() != 2 {
            return Err("country must be a two-letter country code".to_string());
        }

        Ok(())
    }
}
