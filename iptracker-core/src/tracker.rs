//! State of the tracker page and the rules to update it.
//!
//! The state is owned by the top-level view and changed only
//! through [`TrackerState::begin_request`] and
//! [`TrackerState::finish_request`].
//!
//! Resolutions may overlap. Only the result of the most recently
//! started request is applied, results of older requests are
//! discarded as stale no matter in which order they arrive.

use crate::{entities::LocationRecord, usecases::Error};

/// Identifies a single resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// What happened to the result of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The location has been replaced.
    Applied,
    /// The error is shown and the location is kept.
    Failed,
    /// A newer request has been started in the meantime.
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    pub location: LocationRecord,
    pub error: Option<Error>,
    latest_request: Option<RequestId>,
    in_flight: usize,
}

impl TrackerState {
    pub fn begin_request(&mut self) -> RequestId {
        let id = RequestId(self.latest_request.map_or(0, |RequestId(id)| id + 1));
        self.latest_request = Some(id);
        self.in_flight += 1;
        self.error = None;
        id
    }

    pub fn finish_request(
        &mut self,
        id: RequestId,
        result: Result<LocationRecord, Error>,
    ) -> Outcome {
        debug_assert!(self.in_flight > 0);
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.latest_request != Some(id) {
            log::debug!("Discard result of stale request {id:?}");
            return Outcome::Stale;
        }
        match result {
            Ok(location) => {
                self.location = location;
                Outcome::Applied
            }
            Err(err) => {
                self.error = Some(err);
                Outcome::Failed
            }
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

/// The address to search for, or `None` if the input is blank.
#[must_use]
pub fn parse_search_input(input: &str) -> Option<&str> {
    let ip = input.trim();
    (!ip.is_empty()).then_some(ip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateways::GatewayError;
    use iptracker_entities::builders::*;

    fn paris() -> LocationRecord {
        LocationRecord::build()
            .ip_address("1.2.3.4")
            .city("Paris")
            .country("France")
            .pos(48.8, 2.3)
            .finish()
    }

    fn london() -> LocationRecord {
        LocationRecord::build()
            .ip_address("5.6.7.8")
            .city("London")
            .country("United Kingdom")
            .pos(51.5, -0.1)
            .finish()
    }

    fn transport_error() -> Error {
        Error::Transport(GatewayError::Transport("offline".into()))
    }

    #[test]
    fn initial_state() {
        let state = TrackerState::default();
        assert_eq!(LocationRecord::default(), state.location);
        assert!(state.error.is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn replace_location_on_success() {
        let mut state = TrackerState::default();
        let id = state.begin_request();
        assert!(state.is_loading());
        assert_eq!(Outcome::Applied, state.finish_request(id, Ok(paris())));
        assert_eq!(paris(), state.location);
        assert!(!state.is_loading());

        let id = state.begin_request();
        assert_eq!(Outcome::Applied, state.finish_request(id, Ok(london())));
        assert_eq!(london(), state.location);
    }

    #[test]
    fn keep_location_on_failure() {
        let mut state = TrackerState::default();
        let id = state.begin_request();
        state.finish_request(id, Ok(paris()));

        let id = state.begin_request();
        let err = Error::InvalidAddress {
            ip: "foo".into(),
            message: None,
        };
        assert_eq!(Outcome::Failed, state.finish_request(id, Err(err.clone())));
        assert_eq!(paris(), state.location);
        assert_eq!(Some(err), state.error);
    }

    #[test]
    fn keep_location_on_transport_failure() {
        let mut state = TrackerState::default();
        let id = state.begin_request();
        state.finish_request(id, Ok(paris()));

        let id = state.begin_request();
        assert_eq!(
            Outcome::Failed,
            state.finish_request(id, Err(transport_error()))
        );
        assert_eq!(paris(), state.location);
        assert_eq!(Some(transport_error()), state.error);
        assert!(!state.is_loading());
    }

    #[test]
    fn clear_error_on_next_attempt() {
        let mut state = TrackerState::default();
        let id = state.begin_request();
        state.finish_request(id, Err(transport_error()));
        assert!(state.error.is_some());
        let _ = state.begin_request();
        assert!(state.error.is_none());
    }

    #[test]
    fn dismiss_error() {
        let mut state = TrackerState::default();
        let id = state.begin_request();
        state.finish_request(id, Err(transport_error()));
        state.dismiss_error();
        assert!(state.error.is_none());
    }

    #[test]
    fn discard_results_of_superseded_requests() {
        let mut state = TrackerState::default();
        let first = state.begin_request();
        let second = state.begin_request();
        assert!(first < second);

        assert_eq!(Outcome::Applied, state.finish_request(second, Ok(london())));
        assert!(state.is_loading());
        assert_eq!(Outcome::Stale, state.finish_request(first, Ok(paris())));
        assert_eq!(london(), state.location);
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_failures_are_not_shown() {
        let mut state = TrackerState::default();
        let first = state.begin_request();
        let second = state.begin_request();
        assert_eq!(
            Outcome::Stale,
            state.finish_request(first, Err(transport_error()))
        );
        assert!(state.error.is_none());
        assert_eq!(Outcome::Applied, state.finish_request(second, Ok(paris())));
    }

    #[test]
    fn parse_blank_search_input() {
        assert_eq!(None, parse_search_input(""));
        assert_eq!(None, parse_search_input("   "));
        assert_eq!(None, parse_search_input("\t\n"));
    }

    #[test]
    fn parse_search_input_verbatim_but_trimmed() {
        assert_eq!(Some("1.2.3.4"), parse_search_input(" 1.2.3.4 "));
        assert_eq!(Some("not an ip"), parse_search_input("not an ip"));
        assert_eq!(Some("2001:db8::1"), parse_search_input("2001:db8::1"));
    }
}
