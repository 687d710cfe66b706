//! Booking form behaviour: debounce, bias, location and map click settings

use std::time::Duration;

use application::{ClickPolicy, EndpointSettings};
use domain::Coordinate;
use serde::{Deserialize, Serialize};

/// Geographic point configured as an inline table: `{ latitude = .., longitude = .. }`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl CoordinateConfig {
    /// Convert to a domain `Coordinate`, `None` if out of range
    #[must_use]
    pub fn to_coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.latitude, self.longitude).ok()
    }
}

impl From<Coordinate> for CoordinateConfig {
    fn from(c: Coordinate) -> Self {
        Self {
            latitude: c.lat(),
            longitude: c.lng(),
        }
    }
}

/// Endpoint selection behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Quiet period before a typed query is sent, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Suggestion bias radius in meters
    #[serde(default = "default_bias_radius")]
    pub bias_radius_meters: u32,

    /// Device location timeout in milliseconds
    #[serde(default = "default_location_timeout_ms")]
    pub location_timeout_ms: u64,

    /// Which endpoint a map click assigns (`fill_empty` or `focused_endpoint`)
    #[serde(default)]
    pub click_policy: ClickPolicy,

    /// Initial map centre
    #[serde(default = "default_center")]
    pub default_center: CoordinateConfig,
}

const fn default_debounce_ms() -> u64 {
    220
}

const fn default_bias_radius() -> u32 {
    20_000
}

const fn default_location_timeout_ms() -> u64 {
    8_000
}

fn default_center() -> CoordinateConfig {
    CoordinateConfig {
        latitude: -23.550_52,
        longitude: -46.633_308,
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            bias_radius_meters: default_bias_radius(),
            location_timeout_ms: default_location_timeout_ms(),
            click_policy: ClickPolicy::default(),
            default_center: default_center(),
        }
    }
}

impl BookingConfig {
    /// Validate ranges
    pub fn validate(&self) -> Result<(), String> {
        if self.default_center.to_coordinate().is_none() {
            return Err(format!(
                "booking.default_center out of range: {}, {}",
                self.default_center.latitude, self.default_center.longitude
            ));
        }
        if self.location_timeout_ms == 0 {
            return Err("booking.location_timeout_ms must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Convert to state machine settings
    ///
    /// An out-of-range centre falls back to São Paulo.
    #[must_use]
    pub fn to_settings(&self) -> EndpointSettings {
        EndpointSettings {
            debounce: Duration::from_millis(self.debounce_ms),
            bias_radius_meters: self.bias_radius_meters,
            location_timeout: Duration::from_millis(self.location_timeout_ms),
            click_policy: self.click_policy,
            default_center: self
                .default_center
                .to_coordinate()
                .unwrap_or_else(Coordinate::sao_paulo),
        }
    }
}

/// Source of the device position
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceLocationConfig {
    /// Fixed position reported as the device location; unset means unavailable
    #[serde(default)]
    pub fixed: Option<CoordinateConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BookingConfig::default();
        assert_eq!(config.debounce_ms, 220);
        assert_eq!(config.bias_radius_meters, 20_000);
        assert_eq!(config.location_timeout_ms, 8_000);
        assert_eq!(config.click_policy, ClickPolicy::FillEmpty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn settings_conversion() {
        let config = BookingConfig {
            debounce_ms: 250,
            click_policy: ClickPolicy::FocusedEndpoint,
            ..Default::default()
        };
        let settings = config.to_settings();
        assert_eq!(settings.debounce, Duration::from_millis(250));
        assert_eq!(settings.location_timeout, Duration::from_secs(8));
        assert_eq!(settings.click_policy, ClickPolicy::FocusedEndpoint);
        assert!((settings.default_center.lat() - -23.550_52).abs() < 1e-9);
    }

    #[test]
    fn invalid_centre_is_rejected() {
        let config = BookingConfig {
            default_center: CoordinateConfig {
                latitude: 120.0,
                longitude: 0.0,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.to_settings().default_center, Coordinate::sao_paulo());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = BookingConfig {
            location_timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn coordinate_round_trip() {
        let config = CoordinateConfig::from(Coordinate::sao_paulo());
        assert_eq!(config.to_coordinate(), Some(Coordinate::sao_paulo()));
    }
}
