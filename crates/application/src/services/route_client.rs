//! Route client and distance aggregator

use std::{fmt, sync::Arc};

use domain::{Coordinate, Envelope, RouteResult};
use tracing::{debug, instrument, warn};

use crate::ports::{RoutePlan, RoutePort};

/// Computes one driving route and aggregates its legs
///
/// Failures never propagate: they produce the "no route" sentinel so a
/// stale route is never left on display.
pub struct RouteClient {
    routes: Arc<dyn RoutePort>,
}

impl fmt::Debug for RouteClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteClient").finish_non_exhaustive()
    }
}

impl RouteClient {
    /// Create a route client
    pub fn new(routes: Arc<dyn RoutePort>) -> Self {
        Self { routes }
    }

    /// Driving route from `origin` to `destination`, or [`RouteResult::none`]
    #[instrument(skip(self))]
    pub async fn compute_route(&self, origin: Coordinate, destination: Coordinate) -> RouteResult {
        match self.routes.driving_route(origin, destination).await {
            Ok(plan) => {
                let route = aggregate_route(plan);
                if route.is_none() {
                    warn!("Route service returned an empty route");
                } else {
                    debug!(
                        distance_m = route.total_distance_meters,
                        duration_s = ?route.total_duration_seconds,
                        points = route.path_points.len(),
                        "Route computed"
                    );
                }
                route
            },
            Err(e) => {
                warn!(error = %e, "Route computation failed");
                RouteResult::none()
            },
        }
    }
}

/// Sum the legs of `plan` and derive the viewport envelope
///
/// Duration is only known when every leg reports one. The envelope starts from
/// the service-reported bounds and grows to cover the leg endpoints and the
/// whole path.
pub fn aggregate_route(plan: RoutePlan) -> RouteResult {
    if plan.legs.is_empty() && plan.path.is_empty() {
        return RouteResult::none();
    }

    let total_distance_meters = plan.legs.iter().map(|leg| leg.distance_meters).sum();
    let total_duration_seconds = if plan.legs.is_empty() {
        None
    } else {
        plan.legs
            .iter()
            .map(|leg| leg.duration_seconds)
            .sum::<Option<u64>>()
    };

    let leg_points = plan.legs.iter().flat_map(|leg| [&leg.start, &leg.end]);
    let points = leg_points.chain(plan.path.iter());
    let envelope = match plan.bounds {
        Some(bounds) => Some(points.fold(bounds, |env, c| env.extended(c))),
        None => Envelope::from_points(points),
    };

    RouteResult {
        path_points: plan.path,
        total_distance_meters,
        total_duration_seconds,
        envelope,
        legs: plan.legs,
    }
}
