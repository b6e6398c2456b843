//! Session-advancing helpers for the UI callbacks.
//!
//! The state machine only reads the session fields an action depends on, so
//! the UI must update them *before* computing a transition. These helpers
//! bundle that mutate-then-transition contract in one place, keeping the
//! component callbacks thin.

use honeyquest_engine::session::is_query_state;
use honeyquest_engine::{Profile, Session, SessionAction, next_state};

/// Advance the session after an answer was submitted. Returns the next
/// session and whether the UI should keep fetching queries.
pub fn advance_after_answer(session: &Session, end_of_tutorial: bool) -> (Session, bool) {
    let mut current = session.clone();
    current.end_of_tutorial = end_of_tutorial;
    current.query_count += 1;

    let pending = next_state(&current, SessionAction::NextQuery);

    // we only continue fetching queries if
    // the next state is still a queries state
    let continue_fetching = is_query_state(pending.state);
    (pending, continue_fetching)
}

/// Advance the session after the user submitted their profile.
pub fn advance_after_profile_submit(session: &Session, profile: Profile) -> Session {
    let current = Session {
        profile: Some(profile),
        ..session.clone()
    };
    next_state(&current, SessionAction::SubmitProfile)
}

/// Reset the whole session when the user clears their profile.
pub fn clear_session(session: &Session) -> Session {
    let current = Session {
        profile: None,
        query_count: 0,
        ..session.clone()
    };
    next_state(&current, SessionAction::ClearProfile)
}
