//! Device location port

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the caller's own position
///
/// Implementations may prompt for permission once per call. Timeouts are
/// applied by the caller, so an implementation may also never resolve.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeviceLocationPort: Send + Sync {
    /// Current coordinate, or `LocationUnavailable`
    async fn current_position(&self) -> Result<Coordinate, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn DeviceLocationPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn DeviceLocationPort>();
    }
}
