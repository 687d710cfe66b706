//! Tunables of the endpoint state machine

use std::time::Duration;

use domain::Coordinate;
use serde::{Deserialize, Serialize};

use crate::services::{DEFAULT_BIAS_RADIUS_METERS, DEFAULT_DEBOUNCE, DEFAULT_LOCATION_TIMEOUT};

/// Which endpoint a map click assigns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickPolicy {
    /// Origin if empty, then destination if empty, otherwise ignore the click
    #[default]
    FillEmpty,
    /// Retarget the most recently focused endpoint; `FillEmpty` when none is focused
    FocusedEndpoint,
}

/// Runtime settings of [`super::EndpointStateMachine`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointSettings {
    /// Quiet period before a typed query is dispatched
    pub debounce: Duration,
    /// Radius of the suggestion bias circle
    pub bias_radius_meters: u32,
    /// Upper bound on a device location fetch
    pub location_timeout: Duration,
    /// Map click assignment rule
    pub click_policy: ClickPolicy,
    /// Initial viewport centre before any endpoint is known
    pub default_center: Coordinate,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            bias_radius_meters: DEFAULT_BIAS_RADIUS_METERS,
            location_timeout: DEFAULT_LOCATION_TIMEOUT,
            click_policy: ClickPolicy::default(),
            default_center: Coordinate::sao_paulo(),
        }
    }
}
