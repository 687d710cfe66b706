//! Adapters implementing application ports

mod device_location;
mod geocoding_adapter;
mod places_adapter;
mod route_adapter;

pub use device_location::{FixedLocationAdapter, UnavailableLocationAdapter};
pub use geocoding_adapter::GeocodingAdapter;
pub use places_adapter::PlacesAdapter;
pub use route_adapter::RouteAdapter;
