//! Computed driving route

use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinate, Envelope};

/// One point-to-point segment of a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Where the leg starts (snapped to the road network)
    pub start: Coordinate,
    /// Where the leg ends
    pub end: Coordinate,
    /// Driving distance in meters
    pub distance_meters: u64,
    /// Driving time in seconds, when the service reports it
    pub duration_seconds: Option<u64>,
}

/// A computed route between the two endpoints
///
/// The empty value (see [`RouteResult::none`]) is the "no route" sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Ordered polyline of the route
    pub path_points: Vec<Coordinate>,
    /// Sum of all leg distances
    pub total_distance_meters: u64,
    /// Sum of all leg durations; `None` if any leg lacks one
    pub total_duration_seconds: Option<u64>,
    /// Bounding box used to fit the viewport
    pub envelope: Option<Envelope>,
    /// Legs in travel order, with endpoints snapped to the road network
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

impl RouteResult {
    /// The "no route" sentinel
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether this is the "no route" sentinel
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.path_points.is_empty() && self.total_distance_meters == 0
    }

    /// Distance text, e.g. `12.0 km`
    #[must_use]
    pub fn distance_text(&self) -> String {
        format_distance(self.total_distance_meters)
    }

    /// Duration text, e.g. `1 h 5 min`
    #[must_use]
    pub fn duration_text(&self) -> Option<String> {
        self.total_duration_seconds.map(format_duration)
    }

    /// Snapped start of the first leg and end of the last leg
    #[must_use]
    pub fn snapped_endpoints(&self) -> Option<(Coordinate, Coordinate)> {
        Some((self.legs.first()?.start, self.legs.last()?.end))
    }

    /// Text for the distance badge drawn on the map
    #[must_use]
    pub fn badge_text(&self) -> String {
        if self.is_none() {
            return NO_ROUTE_BADGE.to_string();
        }
        match self.duration_text() {
            Some(duration) => format!("Distance: {} • Time: {duration}", self.distance_text()),
            None => format!("Distance: {}", self.distance_text()),
        }
    }
}

/// Badge text when no route is displayed
pub const NO_ROUTE_BADGE: &str = "Distance: —";

/// Format a distance in meters (`850 m`, `12.0 km`)
#[must_use]
pub fn format_distance(meters: u64) -> String {
    if meters < 1000 {
        format!("{meters} m")
    } else {
        #[allow(clippy::cast_precision_loss)]
        let km = meters as f64 / 1000.0;
        format!("{km:.1} km")
    }
}

/// Format a duration in seconds (`< 1 min`, `25 min`, `1 h 5 min`, `2 h`)
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let minutes = (seconds + 30) / 60;
    if minutes == 0 {
        return "< 1 min".to_string();
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h} h"),
        (h, m) => format!("{h} h {m} min"),
    }
}
