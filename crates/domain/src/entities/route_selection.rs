//! Value emitted to the booking form on every endpoint transition

use serde::{Deserialize, Serialize};

use super::{ResolvedPlace, RouteResult};

/// Snapshot of the resolved endpoints and route summary
///
/// Serializes to `{origin, destination, distanceMeters, durationText}` with
/// each endpoint as `{address, lat, lng}` or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSelection {
    pub origin: Option<ResolvedPlace>,
    pub destination: Option<ResolvedPlace>,
    pub distance_meters: Option<u64>,
    pub duration_text: Option<String>,
}

impl RouteSelection {
    /// Build a snapshot; a missing or sentinel route yields null distance and duration
    #[must_use]
    pub fn new(
        origin: Option<ResolvedPlace>,
        destination: Option<ResolvedPlace>,
        route: Option<&RouteResult>,
    ) -> Self {
        let route = route.filter(|r| !r.is_none());
        Self {
            origin,
            destination,
            distance_meters: route.map(|r| r.total_distance_meters),
            duration_text: route.and_then(RouteResult::duration_text),
        }
    }

    /// Whether both endpoints are resolved
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.origin.is_some() && self.destination.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Coordinate;

    #[test]
    fn empty_selection_serializes_nulls() {
        let json = serde_json::to_value(RouteSelection::default()).unwrap();
        assert!(json["origin"].is_null());
        assert!(json["destination"].is_null());
        assert!(json["distanceMeters"].is_null());
        assert!(json["durationText"].is_null());
    }

    #[test]
    fn sentinel_route_reports_null_distance() {
        let place = ResolvedPlace::from_coordinate(Coordinate::new(1.0, 1.0).unwrap());
        let sel = RouteSelection::new(
            Some(place.clone()),
            Some(place),
            Some(&RouteResult::none()),
        );
        assert!(sel.is_complete());
        assert!(sel.distance_meters.is_none());
        assert!(sel.duration_text.is_none());
    }

    #[test]
    fn route_fills_distance_and_duration() {
        let c = Coordinate::new(1.0, 1.0).unwrap();
        let route = RouteResult {
            path_points: vec![c],
            total_distance_meters: 12_000,
            total_duration_seconds: Some(1_500),
            envelope: None,
            legs: Vec::new(),
        };
        let sel = RouteSelection::new(None, None, Some(&route));
        assert_eq!(sel.distance_meters, Some(12_000));
        assert_eq!(sel.duration_text.as_deref(), Some("25 min"));
    }
}
