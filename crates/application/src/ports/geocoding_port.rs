//! Geocoding port
//!
//! Forward (address → place) and reverse (coordinate → address) lookups.

use async_trait::async_trait;
use domain::{Coordinate, ResolvedPlace};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forward and reverse geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a free-text address to a place
    async fn geocode(&self, address: &str) -> Result<ResolvedPlace, ApplicationError>;

    /// Canonical address for a coordinate
    async fn reverse_geocode(&self, coordinate: Coordinate) -> Result<String, ApplicationError>;
}
