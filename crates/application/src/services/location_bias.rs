//! Location bias provider
//!
//! Best-effort wrapper around the device location port: a single attempt
//! under an explicit timeout, with unavailability reported as `None`.

use std::{fmt, sync::Arc, time::Duration};

use domain::Coordinate;
use tracing::{debug, instrument, warn};

use crate::ports::{DeviceLocationPort, LocationBias};

/// Default radius of the bias circle in meters
pub const DEFAULT_BIAS_RADIUS_METERS: u32 = 20_000;

/// Default device-location timeout
pub const DEFAULT_LOCATION_TIMEOUT: Duration = Duration::from_millis(8_000);

/// Turns the device position into a suggestion bias
pub struct LocationBiasProvider {
    location: Arc<dyn DeviceLocationPort>,
    radius_meters: u32,
    timeout: Duration,
}

impl fmt::Debug for LocationBiasProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationBiasProvider")
            .field("radius_meters", &self.radius_meters)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl LocationBiasProvider {
    /// Create a provider with default radius and timeout
    pub fn new(location: Arc<dyn DeviceLocationPort>) -> Self {
        Self {
            location,
            radius_meters: DEFAULT_BIAS_RADIUS_METERS,
            timeout: DEFAULT_LOCATION_TIMEOUT,
        }
    }

    /// Set the bias radius
    #[must_use]
    pub const fn with_radius(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    /// Set the location timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configured location timeout
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Configured bias radius
    pub const fn radius_meters(&self) -> u32 {
        self.radius_meters
    }

    /// Device coordinate, or `None` on denial, error or timeout
    #[instrument(skip(self))]
    pub async fn get_bias_location(&self, timeout: Duration) -> Option<Coordinate> {
        match tokio::time::timeout(timeout, self.location.current_position()).await {
            Ok(Ok(coordinate)) => {
                debug!(lat = coordinate.lat(), lng = coordinate.lng(), "Device located");
                Some(coordinate)
            },
            Ok(Err(e)) => {
                warn!(error = %e, "Device location unavailable");
                None
            },
            Err(_) => {
                warn!(?timeout, "Device location timed out");
                None
            },
        }
    }

    /// Bias circle around the device, using the configured timeout
    pub async fn bias(&self) -> Option<LocationBias> {
        self.get_bias_location(self.timeout)
            .await
            .map(|center| self.bias_around(center))
    }

    /// Bias circle of the configured radius around `center`
    pub const fn bias_around(&self, center: Coordinate) -> LocationBias {
        LocationBias::new(center, self.radius_meters)
    }
}
