//! Domain layer for MoveRoute
//!
//! Contains the value objects and entities of address resolution and route
//! computation: coordinates, endpoint roles, resolved places, suggestions and
//! computed routes. This layer performs no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
