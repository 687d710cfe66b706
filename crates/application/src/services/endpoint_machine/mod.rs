//! Endpoint state machine
//!
//! Owns the origin and destination slots, the per-field suggestion lists and
//! the current route. Every input modality (typed text, suggestion pick,
//! map click, marker drag, device location) funnels into one commit path
//! that rotates the field's session token and, once both endpoints are
//! resolved, recomputes the route.
//!
//! Sub-modules:
//! - [`settings`]: debounce, bias, timeout and click policy tunables
//! - `state`: the mutable slots and request sequencing keys
//!
//! Responses are applied only while their request ticket is still the latest
//! for its key; anything superseded in flight is dropped on arrival.

mod settings;
mod state;

use std::{fmt, sync::Arc};

use domain::{
    Coordinate, DomainError, EndpointRole, NO_ROUTE_BADGE, ResolvedPlace, RouteResult,
    RouteSelection, SessionToken, Suggestion,
};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

pub use self::settings::{ClickPolicy, EndpointSettings};
use self::state::{EndpointState, RequestKey};
use super::{
    Debouncer, GeocodeClient, LocationBiasProvider, RequestSequencer, RouteClient,
    SessionTokenManager, SuggestionClient, Ticket,
};
use crate::{
    error::ApplicationError,
    ports::{
        DeviceLocationPort, GeocodingPort, LocationBias, MapSurfacePort, NullMapSurface,
        PlacesPort, RoutePort, SelectionObserver,
    },
};

struct Inner {
    suggestions: SuggestionClient,
    geocoder: GeocodeClient,
    router: RouteClient,
    locator: LocationBiasProvider,
    tokens: Arc<SessionTokenManager>,
    sequencer: RequestSequencer<RequestKey>,
    debouncer: Debouncer<EndpointRole>,
    surface: Arc<dyn MapSurfacePort>,
    observers: Vec<Arc<dyn SelectionObserver>>,
    settings: EndpointSettings,
    state: Mutex<EndpointState>,
}

/// Coordinates origin/destination state across input modalities
///
/// Cheap to clone; clones share the same state. The internal lock is never
/// held across an await point, and observers are called with it held, so an
/// observer must not call back into the machine synchronously.
#[derive(Clone)]
pub struct EndpointStateMachine {
    inner: Arc<Inner>,
}

impl fmt::Debug for EndpointStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointStateMachine")
            .field("settings", &self.inner.settings)
            .field("observers", &self.inner.observers.len())
            .finish_non_exhaustive()
    }
}

/// Builder for [`EndpointStateMachine`]
pub struct EndpointStateMachineBuilder {
    places: Arc<dyn PlacesPort>,
    geocoding: Arc<dyn GeocodingPort>,
    routes: Arc<dyn RoutePort>,
    location: Arc<dyn DeviceLocationPort>,
    surface: Arc<dyn MapSurfacePort>,
    observers: Vec<Arc<dyn SelectionObserver>>,
    settings: EndpointSettings,
}

impl fmt::Debug for EndpointStateMachineBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointStateMachineBuilder")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl EndpointStateMachineBuilder {
    /// Override the default settings
    #[must_use]
    pub fn settings(mut self, settings: EndpointSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Attach a rendering surface (defaults to [`NullMapSurface`])
    #[must_use]
    pub fn surface(mut self, surface: Arc<dyn MapSurfacePort>) -> Self {
        self.surface = surface;
        self
    }

    /// Register an observer for selection snapshots
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn SelectionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Build the machine in the `Empty` state
    pub fn build(self) -> EndpointStateMachine {
        let tokens = Arc::new(SessionTokenManager::new());
        let locator = LocationBiasProvider::new(self.location)
            .with_radius(self.settings.bias_radius_meters)
            .with_timeout(self.settings.location_timeout);

        EndpointStateMachine {
            inner: Arc::new(Inner {
                suggestions: SuggestionClient::new(Arc::clone(&self.places), Arc::clone(&tokens)),
                geocoder: GeocodeClient::new(self.places, self.geocoding, Arc::clone(&tokens)),
                router: RouteClient::new(self.routes),
                locator,
                tokens,
                sequencer: RequestSequencer::new(),
                debouncer: Debouncer::new(),
                surface: self.surface,
                observers: self.observers,
                settings: self.settings,
                state: Mutex::new(EndpointState::default()),
            }),
        }
    }
}

impl EndpointStateMachine {
    /// Start building a machine over the four external collaborators
    pub fn builder(
        places: Arc<dyn PlacesPort>,
        geocoding: Arc<dyn GeocodingPort>,
        routes: Arc<dyn RoutePort>,
        location: Arc<dyn DeviceLocationPort>,
    ) -> EndpointStateMachineBuilder {
        EndpointStateMachineBuilder {
            places,
            geocoding,
            routes,
            location,
            surface: Arc::new(NullMapSurface),
            observers: Vec::new(),
            settings: EndpointSettings::default(),
        }
    }

    // --- Transitions ---

    /// Assign `place` to `role`
    ///
    /// Discards the role's suggestions, rotates its session token and clears
    /// any displayed route. When both endpoints are then resolved the route
    /// is recomputed before this returns.
    #[instrument(skip(self, place), fields(address = %place.address))]
    pub async fn set(&self, role: EndpointRole, place: ResolvedPlace) {
        self.commit(role, place, None).await;
    }

    /// Empty `role`'s slot and discard the route
    #[instrument(skip(self))]
    pub fn clear(&self, role: EndpointRole) {
        let mut state = self.inner.state.lock();
        self.inner.sequencer.invalidate(&RequestKey::Endpoint(role));
        state.claims[role.index()] = None;
        if state.slots[role.index()].take().is_some() {
            self.inner.surface.remove_marker(role);
        }
        self.discard_route(&mut state);
        self.emit(&state);
    }

    /// Assign a clicked coordinate according to the click policy
    ///
    /// Returns the role that was assigned, or `None` when the click was
    /// ignored or superseded while reverse-geocoding.
    #[instrument(skip(self))]
    pub async fn map_click(&self, coordinate: Coordinate) -> Option<EndpointRole> {
        let (role, ticket) = {
            let mut state = self.inner.state.lock();
            let Some(role) = state.click_target(self.inner.settings.click_policy, &self.inner.sequencer)
            else {
                debug!("Both endpoints set, ignoring map click");
                return None;
            };
            let ticket = self.inner.sequencer.issue(RequestKey::Endpoint(role));
            state.claims[role.index()] = Some(ticket.clone());
            (role, ticket)
        };

        let place = self.inner.geocoder.reverse_geocode(coordinate).await;
        self.commit(role, place, Some(&ticket)).await.then_some(role)
    }

    /// Resolve the device position and assign it to the origin
    ///
    /// Unavailability leaves every slot untouched. A located position also
    /// becomes the suggestion bias.
    #[instrument(skip(self))]
    pub async fn use_my_location(&self) -> bool {
        let role = EndpointRole::Origin;
        let timeout = self.inner.locator.timeout();
        let Some(coordinate) = self.inner.locator.get_bias_location(timeout).await else {
            info!("Location unavailable, origin left unchanged");
            return false;
        };
        // Only a located position may supersede in-flight origin work
        let ticket = self.inner.sequencer.issue(RequestKey::Endpoint(role));
        self.inner.state.lock().bias = Some(self.inner.locator.bias_around(coordinate));

        let place = self.inner.geocoder.reverse_geocode(coordinate).await;
        self.commit(role, place, Some(&ticket)).await
    }

    /// Re-place `role` at a dragged marker position
    #[instrument(skip(self))]
    pub async fn move_endpoint(&self, role: EndpointRole, coordinate: Coordinate) -> bool {
        let ticket = self.inner.sequencer.issue(RequestKey::Endpoint(role));
        let place = self.inner.geocoder.reverse_geocode(coordinate).await;
        self.commit(role, place, Some(&ticket)).await
    }

    /// Mark `role` as the field the user is working in
    pub fn focus(&self, role: EndpointRole) {
        self.inner.state.lock().focused = Some(role);
    }

    /// Record typed text and arm a debounced suggestion query
    ///
    /// Blank text cancels the pending query and empties the list at once.
    pub fn input_text(&self, role: EndpointRole, text: impl Into<String>) {
        let text = text.into();
        if text.trim().is_empty() {
            self.inner.debouncer.cancel(&role);
            let mut state = self.inner.state.lock();
            self.inner.sequencer.invalidate(&RequestKey::Suggestions(role));
            state.suggestions[role.index()].clear();
            return;
        }

        self.focus(role);
        let machine = self.clone();
        self.inner
            .debouncer
            .schedule(role, self.inner.settings.debounce, move || async move {
                machine.refresh_suggestions(role, &text).await;
            });
    }

    /// Query suggestions for `text` immediately, bypassing the debounce
    ///
    /// Returns the list now stored for `role`. A response overtaken by a
    /// newer query is discarded.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn refresh_suggestions(&self, role: EndpointRole, text: &str) -> Vec<Suggestion> {
        let text = text.trim();
        let (ticket, bias) = {
            let mut state = self.inner.state.lock();
            if text.is_empty() {
                self.inner.sequencer.invalidate(&RequestKey::Suggestions(role));
                state.suggestions[role.index()].clear();
                return Vec::new();
            }
            (
                self.inner.sequencer.issue(RequestKey::Suggestions(role)),
                state.bias,
            )
        };

        let results = self
            .inner
            .suggestions
            .query_suggestions(role, text, bias)
            .await;

        let mut state = self.inner.state.lock();
        if !self.inner.sequencer.is_latest(&ticket) {
            debug!(%role, "Discarding superseded suggestions");
            return state.suggestions[role.index()].clone();
        }
        state.suggestions[role.index()].clone_from(&results);
        results
    }

    /// Resolve the suggestion at `index` and commit it to `role`
    ///
    /// On `DetailLookupFailed` the endpoint keeps its previous value and the
    /// suggestion list is cleared so the user searches again.
    #[instrument(skip(self))]
    pub async fn select_suggestion(
        &self,
        role: EndpointRole,
        index: usize,
    ) -> Result<ResolvedPlace, ApplicationError> {
        let (suggestion, ticket) = {
            let state = self.inner.state.lock();
            let Some(suggestion) = state.suggestions[role.index()].get(index).cloned() else {
                return Err(DomainError::ValidationError(format!(
                    "no {role} suggestion at index {index}"
                ))
                .into());
            };
            (
                suggestion,
                self.inner.sequencer.issue(RequestKey::Endpoint(role)),
            )
        };

        match self.inner.geocoder.resolve_suggestion(role, &suggestion).await {
            Ok(place) => {
                if !self.commit(role, place.clone(), Some(&ticket)).await {
                    debug!(%role, "Selection overtaken by a newer assignment");
                }
                Ok(place)
            },
            Err(e) => {
                warn!(%role, error = %e, "Selection rejected");
                let mut state = self.inner.state.lock();
                if self.inner.sequencer.is_latest(&ticket) {
                    self.inner.sequencer.invalidate(&RequestKey::Suggestions(role));
                    state.suggestions[role.index()].clear();
                }
                Err(e)
            },
        }
    }

    /// Forward-geocode typed text and commit it to `role`
    ///
    /// Failure leaves the endpoint untouched.
    #[instrument(skip(self, address), fields(address_len = address.len()))]
    pub async fn set_address(
        &self,
        role: EndpointRole,
        address: &str,
    ) -> Result<ResolvedPlace, ApplicationError> {
        let ticket = self.inner.sequencer.issue(RequestKey::Endpoint(role));
        let place = self.inner.geocoder.geocode_address(address).await?;
        self.commit(role, place.clone(), Some(&ticket)).await;
        Ok(place)
    }

    /// Fetch the device position once and keep it as the suggestion bias
    pub async fn prime_bias(&self) -> Option<LocationBias> {
        let bias = self.inner.locator.bias().await;
        if bias.is_some() {
            self.inner.state.lock().bias = bias;
        }
        bias
    }

    /// Cancel pending debounced queries
    pub fn shutdown(&self) {
        self.inner.debouncer.cancel_all();
    }

    // --- Queries ---

    /// Current value for the consuming form
    pub fn snapshot(&self) -> RouteSelection {
        self.inner.state.lock().selection()
    }

    /// Current route, `None` while not both endpoints are resolved
    pub fn route(&self) -> Option<RouteResult> {
        self.inner.state.lock().route.clone()
    }

    /// Suggestions currently listed under `role`
    pub fn suggestions(&self, role: EndpointRole) -> Vec<Suggestion> {
        self.inner.state.lock().suggestions[role.index()].clone()
    }

    /// Resolved place of `role`
    pub fn endpoint(&self, role: EndpointRole) -> Option<ResolvedPlace> {
        self.inner.state.lock().slot(role).cloned()
    }

    /// Most recently focused field
    pub fn focused(&self) -> Option<EndpointRole> {
        self.inner.state.lock().focused
    }

    /// Active search-session token of `role`, if a session has started
    pub fn session_token(&self, role: EndpointRole) -> Option<SessionToken> {
        self.inner.tokens.peek(role)
    }

    /// Viewport centre to show before any endpoint is known
    pub fn default_center(&self) -> Coordinate {
        self.inner.settings.default_center
    }

    // --- Internals ---

    /// Apply a resolved place unless `ticket` has been superseded
    async fn commit(
        &self,
        role: EndpointRole,
        place: ResolvedPlace,
        ticket: Option<&Ticket<RequestKey>>,
    ) -> bool {
        let pending_route = {
            let mut state = self.inner.state.lock();
            if ticket.is_some_and(|t| !self.inner.sequencer.is_latest(t)) {
                debug!(%role, "Discarding superseded endpoint resolution");
                return false;
            }

            self.inner.sequencer.invalidate(&RequestKey::Endpoint(role));
            self.inner.sequencer.invalidate(&RequestKey::Suggestions(role));
            self.inner.debouncer.cancel(&role);
            self.inner.tokens.rotate(role);

            let slot = role.index();
            state.suggestions[slot].clear();
            state.claims[slot] = None;
            self.inner
                .surface
                .place_marker(role, place.coordinate, &place.address);
            info!(%role, address = %place.address, "Endpoint set");
            state.slots[slot] = Some(place);

            self.discard_route(&mut state);
            let pending = state
                .endpoints()
                .map(|(o, d)| (self.inner.sequencer.issue(RequestKey::Route), o, d));
            self.emit(&state);
            pending
        };

        if let Some((ticket, origin, destination)) = pending_route {
            self.recompute(ticket, origin, destination).await;
        }
        true
    }

    async fn recompute(
        &self,
        ticket: Ticket<RequestKey>,
        origin: Coordinate,
        destination: Coordinate,
    ) {
        let route = self.inner.router.compute_route(origin, destination).await;

        let mut state = self.inner.state.lock();
        if !self.inner.sequencer.is_latest(&ticket) {
            debug!(seq = ticket.seq(), "Discarding superseded route");
            return;
        }
        self.show_route(&state, &route);
        state.route = Some(route);
        self.emit(&state);
    }

    /// Drop the current route and supersede any in-flight computation
    fn discard_route(&self, state: &mut EndpointState) {
        self.inner.sequencer.invalidate(&RequestKey::Route);
        if state.route.take().is_some() {
            self.inner.surface.clear_route();
            self.inner.surface.set_badge(NO_ROUTE_BADGE);
        }
    }

    fn show_route(&self, state: &EndpointState, route: &RouteResult) {
        let surface = &self.inner.surface;
        if route.is_none() {
            surface.clear_route();
        } else {
            // Markers follow the road-snapped leg ends; slots keep the chosen coordinates
            if let Some((start, end)) = route.snapped_endpoints() {
                for (role, position) in [(EndpointRole::Origin, start), (EndpointRole::Destination, end)] {
                    let title = state.slot(role).map_or(role.label(), |p| p.address.as_str());
                    surface.place_marker(role, position, title);
                }
            }
            surface.draw_route(&route.path_points);
            if let Some(envelope) = &route.envelope {
                surface.fit_envelope(envelope);
            }
        }
        surface.set_badge(&route.badge_text());
    }

    fn emit(&self, state: &EndpointState) {
        if self.inner.observers.is_empty() {
            return;
        }
        let selection = state.selection();
        for observer in &self.inner.observers {
            observer.on_selection(&selection);
        }
    }
}
