//! Application configuration
//!
//! Split into focused sub-modules:
//! - `maps`: map web service endpoint, key and locale
//! - `booking`: debounce, bias radius, location timeout, click policy, map centre
//!
//! Sources are layered: built-in defaults, then an optional `config.toml`,
//! then `MOVEROUTE_*` environment variables with `__` between nested keys
//! (e.g. `MOVEROUTE_MAPS__API_KEY`, `MOVEROUTE_BOOKING__DEBOUNCE_MS`).

mod booking;
mod maps;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use booking::{BookingConfig, CoordinateConfig, DeviceLocationConfig};
pub use maps::MapsAppConfig;

use crate::telemetry::TelemetryConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MOVEROUTE";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Map web service configuration
    #[serde(default)]
    pub maps: MapsAppConfig,

    /// Endpoint selection behaviour
    #[serde(default)]
    pub booking: BookingConfig,

    /// Device position source
    #[serde(default)]
    pub device_location: DeviceLocationConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file and environment
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., MOVEROUTE_MAPS__API_KEY)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: Self = config.try_deserialize()?;
        debug!(maps = ?app.maps, booking = ?app.booking, "Configuration loaded");
        Ok(app)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid setting.
    pub fn validate(&self) -> Result<(), String> {
        if !self.maps.has_api_key() {
            return Err(format!(
                "maps.api_key is required (set {ENV_PREFIX}_MAPS__API_KEY)"
            ));
        }
        self.maps.to_maps_config().validate()?;
        self.booking.validate()
    }
}
