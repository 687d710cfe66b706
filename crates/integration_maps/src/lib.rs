//! Map web service integration for MoveRoute
//!
//! Provides address autocomplete, place details, forward/reverse geocoding and
//! driving directions over the hosted map web service JSON API.
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration crates.
//! [`PlacesClient`], [`GeocodingClient`] and [`DirectionsClient`] define one
//! interface per endpoint family; all three are implemented by
//! [`GoogleMapsClient`], which owns the shared HTTP connection pool.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::Coordinate;
//! use integration_maps::{DirectionsClient, GoogleMapsClient, MapsConfig};
//!
//! let client = GoogleMapsClient::new(&MapsConfig { api_key: key, ..Default::default() })?;
//! let route = client
//!     .driving_route(
//!         Coordinate::new(-23.55, -46.63)?, // Sé
//!         Coordinate::new(-23.60, -46.70)?, // Santo Amaro
//!     )
//!     .await?;
//! ```

mod client;
mod config;
mod directions;
mod error;
mod geocoding;
mod models;
mod places;
mod polyline;

pub use client::GoogleMapsClient;
pub use config::MapsConfig;
pub use directions::DirectionsClient;
pub use error::MapsError;
pub use geocoding::GeocodingClient;
pub use models::{DirectionsLeg, DirectionsRoute, PlacePrediction, PlaceResult, SearchBias};
pub use places::PlacesClient;
pub use polyline::decode_polyline;
