//! Map web service error types

use thiserror::Error;

/// Errors that can occur when calling the map web services
#[derive(Debug, Error)]
pub enum MapsError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// HTTP request returned a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The service answered with a non-OK API status
    #[error("API status {status}{}", message_suffix(.message))]
    ApiStatus {
        /// Status string as reported by the service (e.g., "REQUEST_DENIED")
        status: String,
        /// Optional error message from the service
        message: Option<String>,
    },

    /// Failed to parse the response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The lookup produced no result
    #[error("Not found: {0}")]
    NotFound(String),

    /// No route between the two points
    #[error("No route found from {from} to {to}")]
    NoRoute {
        /// Origin as "lat,lng"
        from: String,
        /// Destination as "lat,lng"
        to: String,
    },

    /// Quota or rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Invalid request input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

#[allow(clippy::ref_option)]
fn message_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl MapsError {
    /// Map a non-OK API status string to an error
    pub(crate) fn from_status(status: &str, message: Option<String>) -> Self {
        match status {
            "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => Self::RateLimitExceeded,
            "INVALID_REQUEST" => Self::InvalidInput(message.unwrap_or_else(|| status.to_string())),
            _ => Self::ApiStatus {
                status: status.to_string(),
                message,
            },
        }
    }
}
