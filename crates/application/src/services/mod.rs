//! Application services - Use case implementations

mod debounce;
mod endpoint_machine;
mod geocode_client;
mod location_bias;
mod route_client;
mod sequencer;
mod session_tokens;
mod suggestion_client;

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use endpoint_machine::{
    ClickPolicy, EndpointSettings, EndpointStateMachine, EndpointStateMachineBuilder,
};
pub use geocode_client::GeocodeClient;
pub use location_bias::{DEFAULT_BIAS_RADIUS_METERS, DEFAULT_LOCATION_TIMEOUT, LocationBiasProvider};
pub use route_client::{RouteClient, aggregate_route};
pub use sequencer::{RequestSequencer, Ticket};
pub use session_tokens::SessionTokenManager;
pub use suggestion_client::SuggestionClient;
