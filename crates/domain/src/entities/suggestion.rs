//! Autocomplete suggestion

use serde::{Deserialize, Serialize};

/// A candidate place returned by the suggestion service
///
/// Ephemeral: discarded on selection or when the next query result arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description shown in the dropdown
    pub description: String,
    /// Opaque place identifier used for the detail lookup
    pub id: String,
}

impl Suggestion {
    /// Create a new suggestion
    pub fn new(description: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            id: id.into(),
        }
    }
}
