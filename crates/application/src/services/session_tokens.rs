//! Session token manager
//!
//! One continuity token per endpoint role. The token is reused, unchanged,
//! by every suggestion query of a search session and by the detail lookup
//! that ends it; it is rotated exactly once when the selection commits.

use domain::{EndpointRole, SessionToken};
use parking_lot::Mutex;
use tracing::debug;

/// Issues and rotates per-role session tokens
#[derive(Debug, Default)]
pub struct SessionTokenManager {
    tokens: Mutex<[Option<SessionToken>; 2]>,
}

impl SessionTokenManager {
    /// Create a manager with no active sessions
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active token for `role`, creating one if absent
    pub fn current_token(&self, role: EndpointRole) -> SessionToken {
        *self.tokens.lock()[role.index()].get_or_insert_with(|| {
            debug!(%role, "Starting search session");
            SessionToken::new()
        })
    }

    /// Replace the token for `role` with a fresh one
    pub fn rotate(&self, role: EndpointRole) -> SessionToken {
        let token = SessionToken::new();
        self.tokens.lock()[role.index()] = Some(token);
        debug!(%role, "Rotated search session");
        token
    }

    /// Active token for `role` without creating one
    pub fn peek(&self, role: EndpointRole) -> Option<SessionToken> {
        self.tokens.lock()[role.index()]
    }
}
