//! Route adapter - Implements RoutePort using the directions endpoint

use std::sync::Arc;

use application::{
    error::ApplicationError,
    ports::{RoutePlan, RoutePort},
};
use async_trait::async_trait;
use domain::{Coordinate, Envelope, RouteLeg};
use integration_maps::{DirectionsClient, DirectionsRoute, GoogleMapsClient};
use tracing::{debug, instrument};

/// Adapter for driving directions
#[derive(Debug, Clone)]
pub struct RouteAdapter {
    client: Arc<GoogleMapsClient>,
}

impl RouteAdapter {
    /// Create an adapter over a shared client
    pub const fn new(client: Arc<GoogleMapsClient>) -> Self {
        Self { client }
    }

    fn to_plan(route: DirectionsRoute) -> RoutePlan {
        let legs = route
            .legs
            .into_iter()
            .map(|leg| RouteLeg {
                start: leg.start,
                end: leg.end,
                distance_meters: leg.distance_meters,
                duration_seconds: leg.duration_seconds,
            })
            .collect();
        RoutePlan {
            path: route.path,
            legs,
            bounds: route
                .bounds
                .map(|(south_west, north_east)| Envelope::point(south_west).extended(&north_east)),
        }
    }
}

#[async_trait]
impl RoutePort for RouteAdapter {
    #[instrument(skip(self))]
    async fn driving_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RoutePlan, ApplicationError> {
        let route = self
            .client
            .driving_route(origin, destination)
            .await
            .map_err(|e| ApplicationError::RouteComputationFailed(e.to_string()))?;

        debug!(legs = route.legs.len(), points = route.path.len(), "Directions received");
        Ok(Self::to_plan(route))
    }
}
