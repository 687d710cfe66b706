//! Domain entities - Places, suggestions and routes

mod resolved_place;
mod route;
mod route_selection;
mod suggestion;

pub use resolved_place::ResolvedPlace;
pub use route::{NO_ROUTE_BADGE, RouteLeg, RouteResult, format_distance, format_duration};
pub use route_selection::RouteSelection;
pub use suggestion::Suggestion;
