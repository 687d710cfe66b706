//! Route service port

use async_trait::async_trait;
use domain::{Coordinate, Envelope, RouteLeg};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Raw route as returned by the route service, before aggregation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Ordered polyline
    pub path: Vec<Coordinate>,
    /// Legs in travel order
    pub legs: Vec<RouteLeg>,
    /// Viewport reported by the service, if any
    pub bounds: Option<Envelope>,
}

/// Port for driving route computation
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutePort: Send + Sync {
    /// One driving route (no alternatives) between two coordinates
    ///
    /// An empty route set is reported as `RouteComputationFailed`.
    async fn driving_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RoutePlan, ApplicationError>;
}
