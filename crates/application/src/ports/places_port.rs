//! Places suggestion and detail port
//!
//! Defines the interface to the hosted autocomplete service. Adapters in the
//! infrastructure layer implement this port.

use async_trait::async_trait;
use domain::{Coordinate, ResolvedPlace, SessionToken, Suggestion};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Geographic hint used to prioritize nearby suggestions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationBias {
    /// Centre of the bias circle
    pub center: Coordinate,
    /// Radius in meters
    pub radius_meters: u32,
}

impl LocationBias {
    /// Create a bias circle
    #[must_use]
    pub const fn new(center: Coordinate, radius_meters: u32) -> Self {
        Self {
            center,
            radius_meters,
        }
    }
}

/// Port for the places suggestion and detail service
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlacesPort: Send + Sync {
    /// Ordered candidate places for partial text
    ///
    /// Without a bias only the country-level restriction applies.
    async fn suggest(
        &self,
        text: &str,
        bias: Option<LocationBias>,
        token: SessionToken,
    ) -> Result<Vec<Suggestion>, ApplicationError>;

    /// Canonical address and coordinate for a suggestion id
    ///
    /// Fails with `DetailLookupFailed` when the service returns no geometry.
    async fn place_details(
        &self,
        suggestion_id: &str,
        token: SessionToken,
    ) -> Result<ResolvedPlace, ApplicationError>;
}
