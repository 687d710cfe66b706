//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error("Invalid coordinate: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// An address string was empty after trimming
    #[error("Address must not be empty")]
    EmptyAddress,

    /// A suggestion identifier was empty
    #[error("Suggestion id must not be empty")]
    EmptySuggestionId,

    /// Unknown endpoint role name
    #[error("Unknown endpoint role: {0}")]
    UnknownRole(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid coordinate error
    pub const fn invalid_coordinate(lat: f64, lng: f64) -> Self {
        Self::InvalidCoordinate { lat, lng }
    }
}
