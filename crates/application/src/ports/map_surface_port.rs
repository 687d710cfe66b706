//! Map rendering surface port
//!
//! The map canvas is an opaque sink: the endpoint state machine tells it where
//! markers and the route go, and never reads anything back.

use domain::{Coordinate, EndpointRole, Envelope};
#[cfg(test)]
use mockall::automock;

/// Port for the rendering surface
#[cfg_attr(test, automock)]
pub trait MapSurfacePort: Send + Sync {
    /// Place or move the marker of `role`
    fn place_marker(&self, role: EndpointRole, position: Coordinate, title: &str);

    /// Remove the marker of `role`
    fn remove_marker(&self, role: EndpointRole);

    /// Draw the route polyline, replacing any previous one
    fn draw_route(&self, path: &[Coordinate]);

    /// Remove the route polyline
    fn clear_route(&self);

    /// Fit the viewport to `envelope`
    fn fit_envelope(&self, envelope: &Envelope);

    /// Set the distance/time badge text
    fn set_badge(&self, text: &str);
}

/// Surface that discards every command
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMapSurface;

impl MapSurfacePort for NullMapSurface {
    fn place_marker(&self, _role: EndpointRole, _position: Coordinate, _title: &str) {}

    fn remove_marker(&self, _role: EndpointRole) {}

    fn draw_route(&self, _path: &[Coordinate]) {}

    fn clear_route(&self) {}

    fn fit_envelope(&self, _envelope: &Envelope) {}

    fn set_badge(&self, _text: &str) {}
}
