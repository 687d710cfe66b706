//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod endpoint_role;
mod envelope;
mod session_token;

pub use coordinate::Coordinate;
pub use endpoint_role::EndpointRole;
pub use envelope::Envelope;
pub use session_token::SessionToken;
