//! Device location adapters
//!
//! A headless process has no positioning hardware, so the position is either
//! configured up front or reported as unavailable.

use application::{error::ApplicationError, ports::DeviceLocationPort};
use async_trait::async_trait;
use domain::Coordinate;

/// Reports a configured coordinate as the device position
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationAdapter {
    position: Coordinate,
}

impl FixedLocationAdapter {
    /// Create an adapter that always answers `position`
    pub const fn new(position: Coordinate) -> Self {
        Self { position }
    }
}

#[async_trait]
impl DeviceLocationPort for FixedLocationAdapter {
    async fn current_position(&self) -> Result<Coordinate, ApplicationError> {
        Ok(self.position)
    }
}

/// Device without location support
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLocationAdapter;

#[async_trait]
impl DeviceLocationPort for UnavailableLocationAdapter {
    async fn current_position(&self) -> Result<Coordinate, ApplicationError> {
        Err(ApplicationError::LocationUnavailable(
            "no device location configured".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_answers_configured_position() {
        let adapter = FixedLocationAdapter::new(Coordinate::sao_paulo());
        assert_eq!(adapter.current_position().await.unwrap(), Coordinate::sao_paulo());
    }

    #[tokio::test]
    async fn unavailable_reports_location_unavailable() {
        let err = UnavailableLocationAdapter.current_position().await.unwrap_err();
        assert!(matches!(err, ApplicationError::LocationUnavailable(_)));
    }
}
