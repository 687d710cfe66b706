//! Search session continuity token

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque token grouping the suggestion queries and the detail lookup of one
/// search-to-selection cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(Uuid);

impl SessionToken {
    /// Create a new random token
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a token from an existing UUID
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
