//! Mutable state owned by the endpoint state machine

use domain::{Coordinate, EndpointRole, ResolvedPlace, RouteResult, RouteSelection, Suggestion};

use super::ClickPolicy;
use crate::{
    ports::LocationBias,
    services::{RequestSequencer, Ticket},
};

/// Sequencing key of every request the machine dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) enum RequestKey {
    /// Suggestion query for one field
    Suggestions(EndpointRole),
    /// Any lookup that ends in assigning one endpoint
    Endpoint(EndpointRole),
    /// Route between the two endpoints
    Route,
}

#[derive(Debug, Default)]
pub(super) struct EndpointState {
    pub slots: [Option<ResolvedPlace>; 2],
    pub suggestions: [Vec<Suggestion>; 2],
    /// Map clicks still reverse-geocoding, per role
    pub claims: [Option<Ticket<RequestKey>>; 2],
    pub route: Option<RouteResult>,
    pub focused: Option<EndpointRole>,
    pub bias: Option<LocationBias>,
}

impl EndpointState {
    pub fn slot(&self, role: EndpointRole) -> Option<&ResolvedPlace> {
        self.slots[role.index()].as_ref()
    }

    /// Origin and destination coordinates once both are resolved
    pub fn endpoints(&self) -> Option<(Coordinate, Coordinate)> {
        let origin = self.slot(EndpointRole::Origin)?;
        let destination = self.slot(EndpointRole::Destination)?;
        Some((origin.coordinate, destination.coordinate))
    }

    pub fn selection(&self) -> RouteSelection {
        RouteSelection::new(
            self.slots[EndpointRole::Origin.index()].clone(),
            self.slots[EndpointRole::Destination.index()].clone(),
            self.route.as_ref(),
        )
    }

    /// Role a map click applies to, if any
    pub fn click_target(
        &self,
        policy: ClickPolicy,
        sequencer: &RequestSequencer<RequestKey>,
    ) -> Option<EndpointRole> {
        if let (ClickPolicy::FocusedEndpoint, Some(role)) = (policy, self.focused) {
            return Some(role);
        }
        EndpointRole::ALL.into_iter().find(|role| {
            let claimed = self.claims[role.index()]
                .as_ref()
                .is_some_and(|ticket| sequencer.is_latest(ticket));
            self.slot(*role).is_none() && !claimed
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(lat: f64) -> ResolvedPlace {
        ResolvedPlace::from_coordinate(Coordinate::new(lat, 0.0).unwrap())
    }

    #[test]
    fn fill_empty_prefers_origin() {
        let sequencer = RequestSequencer::new();
        let mut state = EndpointState::default();
        assert_eq!(
            state.click_target(ClickPolicy::FillEmpty, &sequencer),
            Some(EndpointRole::Origin)
        );

        state.slots[0] = Some(place(1.0));
        assert_eq!(
            state.click_target(ClickPolicy::FillEmpty, &sequencer),
            Some(EndpointRole::Destination)
        );

        state.slots[1] = Some(place(2.0));
        assert_eq!(state.click_target(ClickPolicy::FillEmpty, &sequencer), None);
    }

    #[test]
    fn destination_only_then_origin() {
        let sequencer = RequestSequencer::new();
        let mut state = EndpointState::default();
        state.slots[1] = Some(place(2.0));
        assert_eq!(
            state.click_target(ClickPolicy::FillEmpty, &sequencer),
            Some(EndpointRole::Origin)
        );
    }

    #[test]
    fn live_claim_skips_role() {
        let sequencer = RequestSequencer::new();
        let mut state = EndpointState::default();
        state.claims[0] = Some(sequencer.issue(RequestKey::Endpoint(EndpointRole::Origin)));
        assert_eq!(
            state.click_target(ClickPolicy::FillEmpty, &sequencer),
            Some(EndpointRole::Destination)
        );

        // A superseded claim no longer blocks the role
        sequencer.invalidate(&RequestKey::Endpoint(EndpointRole::Origin));
        assert_eq!(
            state.click_target(ClickPolicy::FillEmpty, &sequencer),
            Some(EndpointRole::Origin)
        );
    }

    #[test]
    fn focused_policy_overrides_filled_slots() {
        let sequencer = RequestSequencer::new();
        let mut state = EndpointState::default();
        state.slots = [Some(place(1.0)), Some(place(2.0))];
        state.focused = Some(EndpointRole::Origin);

        assert_eq!(state.click_target(ClickPolicy::FillEmpty, &sequencer), None);
        assert_eq!(
            state.click_target(ClickPolicy::FocusedEndpoint, &sequencer),
            Some(EndpointRole::Origin)
        );
    }

    #[test]
    fn selection_reflects_slots() {
        let mut state = EndpointState::default();
        assert_eq!(state.selection(), RouteSelection::default());
        assert!(state.endpoints().is_none());

        state.slots[1] = Some(place(2.0));
        let selection = state.selection();
        assert!(selection.origin.is_none());
        assert_eq!(selection.destination, Some(place(2.0)));
    }
}
