//! Map web service configuration

use integration_maps::MapsConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Map web service settings as loaded from file and environment
#[derive(Clone, Serialize, Deserialize)]
pub struct MapsAppConfig {
    /// API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Base URL of the web service API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Response language
    #[serde(default = "default_language")]
    pub language: String,

    /// ISO 3166-1 alpha-2 country restriction for suggestions
    #[serde(default = "default_country")]
    pub country: String,

    /// Reverse geocode cache TTL in minutes (0 disables the cache)
    #[serde(default = "default_cache_ttl_minutes")]
    pub cache_ttl_minutes: u64,
}

impl std::fmt::Debug for MapsAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsAppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .field("country", &self.country)
            .field("cache_ttl_minutes", &self.cache_ttl_minutes)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://maps.googleapis.com".to_string()
}

const fn default_timeout() -> u64 {
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

impl Default for MapsAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            language: default_language(),
            country: default_country(),
            cache_ttl_minutes: default_cache_ttl_minutes(),
        }
    }
}

impl MapsAppConfig {
    /// Whether an API key is present and non-blank
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Convert to the integration client configuration
    #[must_use]
    pub fn to_maps_config(&self) -> MapsConfig {
        MapsConfig {
            base_url: self.base_url.clone(),
            api_key: self
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().trim().to_string())
                .unwrap_or_default(),
            timeout_secs: self.timeout_secs,
            language: self.language.clone(),
            country: self.country.clone(),
            cache_ttl_minutes: self.cache_ttl_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_brazil() {
        let config = MapsAppConfig::default();
        assert_eq!(config.country, "br");
        assert_eq!(config.language, "pt-BR");
        assert!(!config.has_api_key());
    }

    #[test]
    fn debug_redacts_key() {
        let config = MapsAppConfig {
            api_key: Some(SecretString::from("super-secret")),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn key_is_not_serialized() {
        let config = MapsAppConfig {
            api_key: Some(SecretString::from("super-secret")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super-secret"));
    }

    #[test]
    fn converts_to_client_config() {
        let config = MapsAppConfig {
            api_key: Some(SecretString::from(" key ")),
            cache_ttl_minutes: 0,
            ..Default::default()
        };
        let maps = config.to_maps_config();
        assert_eq!(maps.api_key, "key");
        assert_eq!(maps.cache_ttl_minutes, 0);
        assert!(maps.validate().is_ok());
    }
}
