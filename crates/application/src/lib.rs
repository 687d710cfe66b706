//! Application layer - Use cases and orchestration
//!
//! Contains the port definitions for the map collaborators and the services
//! that resolve addresses, keep origin/destination state consistent across
//! input modalities, and compute the driving route between them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
