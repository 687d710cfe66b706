//! Application-level errors
//!
//! Every variant except `Domain`, `Configuration` and `Internal` is recovered
//! locally by the services; none of them is fatal.

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Suggestion service error or non-OK status
    #[error("Suggestion query failed: {0}")]
    SuggestionQueryFailed(String),

    /// Place detail or forward geocode returned no usable geometry
    #[error("Detail lookup failed: {0}")]
    DetailLookupFailed(String),

    /// Reverse geocoding produced no address
    #[error("Reverse geocoding failed: {0}")]
    ReverseGeocodeFailed(String),

    /// No route found, or the route service failed
    #[error("Route computation failed: {0}")]
    RouteComputationFailed(String),

    /// Device location denied, timed out or unsupported
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::EmptyAddress.into();
        assert_eq!(err.to_string(), "Address must not be empty");
    }
}
