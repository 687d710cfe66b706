//! A geocoded endpoint

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// A coordinate together with its human-readable address
///
/// The address is never empty: when no readable address is known the
/// coordinate's own `"lat, lng"` rendering is used instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    /// Canonical address, or the coordinate rendering as fallback
    pub address: String,
    /// Authoritative position
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl ResolvedPlace {
    /// Create a resolved place, falling back to the coordinate string for a blank address
    pub fn new(coordinate: Coordinate, address: impl Into<String>) -> Self {
        let address = address.into();
        let address = if address.trim().is_empty() {
            coordinate.to_string()
        } else {
            address.trim().to_string()
        };
        Self {
            address,
            coordinate,
        }
    }

    /// Create a place whose address is the coordinate rendering
    pub fn from_coordinate(coordinate: Coordinate) -> Self {
        Self {
            address: coordinate.to_string(),
            coordinate,
        }
    }

    /// Whether the address is only the coordinate fallback
    #[must_use]
    pub fn has_fallback_address(&self) -> bool {
        self.address == self.coordinate.to_string()
    }
}
