//! Driving directions

use async_trait::async_trait;
use domain::Coordinate;
use tracing::{debug, instrument, warn};

use crate::client::{GoogleMapsClient, check_status};
use crate::error::MapsError;
use crate::models::{DirectionsLeg, DirectionsRoute, RawDirectionsResponse, RawLeg, RawRoute};
use crate::polyline::decode_polyline;

const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

/// Trait for route computation clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// Single driving route between two points, without alternatives
    async fn driving_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DirectionsRoute, MapsError>;
}

impl GoogleMapsClient {
    /// Parse the raw directions response into the first route
    fn parse_directions_response(
        origin: Coordinate,
        destination: Coordinate,
        body: RawDirectionsResponse,
    ) -> Result<DirectionsRoute, MapsError> {
        let no_route = || MapsError::NoRoute {
            from: origin.to_query_param(),
            to: destination.to_query_param(),
        };

        if body.status == "ZERO_RESULTS" || body.status == "NOT_FOUND" {
            return Err(no_route());
        }
        check_status(&body.status, body.error_message)?;

        let route = body.routes.into_iter().next().ok_or_else(no_route)?;
        Self::convert_route(route)
    }

    fn convert_route(raw: RawRoute) -> Result<DirectionsRoute, MapsError> {
        let legs = raw
            .legs
            .into_iter()
            .map(Self::convert_leg)
            .collect::<Result<Vec<_>, _>>()?;

        let path = match raw.overview_polyline {
            Some(polyline) => decode_polyline(&polyline.points)?,
            None => Vec::new(),
        };

        let bounds = match raw.bounds {
            Some(b) => Some((b.southwest.to_coordinate()?, b.northeast.to_coordinate()?)),
            None => None,
        };

        Ok(DirectionsRoute { path, legs, bounds })
    }

    fn convert_leg(raw: RawLeg) -> Result<DirectionsLeg, MapsError> {
        let distance_meters = raw.distance.map_or(0, |d| d.value);
        let duration_seconds = raw.duration.map(|d| d.value);

        Ok(DirectionsLeg {
            start: raw.start_location.to_coordinate()?,
            end: raw.end_location.to_coordinate()?,
            distance_meters,
            duration_seconds,
        })
    }
}

#[async_trait]
impl DirectionsClient for GoogleMapsClient {
    #[instrument(skip(self), fields(from = %origin, to = %destination))]
    async fn driving_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<DirectionsRoute, MapsError> {
        let params = [
            ("origin", origin.to_query_param()),
            ("destination", destination.to_query_param()),
            ("mode", "driving".to_string()),
            ("alternatives", "false".to_string()),
        ];

        let body: RawDirectionsResponse = self.get_json(DIRECTIONS_PATH, &params).await?;
        let route = Self::parse_directions_response(origin, destination, body).inspect_err(|e| {
            warn!(error = %e, "Directions request did not yield a route");
        })?;

        debug!(
            legs = route.legs.len(),
            points = route.path.len(),
            "Route computed"
        );
        Ok(route)
    }
}
