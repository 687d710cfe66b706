//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod device_location_port;
mod geocoding_port;
mod map_surface_port;
mod places_port;
mod route_port;
mod selection_observer;

#[cfg(test)]
pub use device_location_port::MockDeviceLocationPort;
pub use device_location_port::DeviceLocationPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use map_surface_port::MockMapSurfacePort;
pub use map_surface_port::{MapSurfacePort, NullMapSurface};
#[cfg(test)]
pub use places_port::MockPlacesPort;
pub use places_port::{LocationBias, PlacesPort};
#[cfg(test)]
pub use route_port::MockRoutePort;
pub use route_port::{RoutePlan, RoutePort};
#[cfg(test)]
pub use selection_observer::MockSelectionObserver;
pub use selection_observer::{ChannelObserver, SelectionObserver};
