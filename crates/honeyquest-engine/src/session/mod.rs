/*!
 * # Session State Machine
 *
 * The guided flow of the quiz is a small deterministic state machine:
 * new users see a teaser first, are then asked for their profile, and only
 * then enter the main query loop; returning users skip straight to the
 * queries. [`next_state`] is a pure function — it never mutates its input
 * and has no side effects. Callers update the session fields an action
 * depends on (profile, query counter, tutorial flag) *before* computing the
 * transition; the machine itself only reads them.
 */

use serde::{Deserialize, Serialize};

use crate::models::profile::Profile;

/// Screens of the quiz UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Landing page for new users
    Init,
    /// New users without profile information get introduced with a teaser
    Teaser,
    /// Ask the user to tell us more about them
    Profile,
    /// The normal program flow, with a profiled user
    Queries,
    /// Update profile information
    ProfileUpdate,
}

/// User actions that drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Start the game
    Start,
    /// Continue to the next query
    NextQuery,
    /// Submit the profile information
    SubmitProfile,
    /// Request to update profile information
    UpdateProfile,
    /// Abort the profile information update
    AbortProfileUpdate,
    /// Clear the entire session
    ClearProfile,
}

/// The full session: current screen, user profile, and flow counters.
///
/// Created once at startup and replaced (never mutated in place) on every
/// transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub state: SessionState,
    /// The current user profile, if available
    pub profile: Option<Profile>,
    /// The number of queries already submitted
    pub query_count: u32,
    /// If the last query indicated the end of the tutorial
    pub end_of_tutorial: bool,
    /// Enable the admin button
    pub show_admin_view: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: SessionState::Init,
            profile: None,
            query_count: 0,
            end_of_tutorial: false,
            show_admin_view: false,
        }
    }
}

/// Computes the next session based on the current session and some action.
///
/// Unlisted (state, action) pairs leave the state unchanged; the machine is
/// total and never fails.
pub fn next_state(session: &Session, action: SessionAction) -> Session {
    use SessionAction as A;
    use SessionState as S;

    let mut next = session.state;

    // special case for actions that are
    // not dependent on the current state
    if action == A::ClearProfile {
        next = S::Init;
    } else {
        // to aid visual clarity, we write state-transitions in full
        // instead of simplifying some conditional expressions
        match session.state {
            S::Init => {
                if action == A::Start && session.profile.is_none() {
                    next = S::Teaser;
                }
                if action == A::Start && session.profile.is_some() {
                    next = S::Queries;
                }
            }

            S::Teaser => {
                // if a user somehow skipped the profile page, ask again after 10 queries
                if action == A::NextQuery && (session.end_of_tutorial || session.query_count > 10) {
                    next = S::Profile;
                }
                if action == A::SubmitProfile && session.profile.is_some() {
                    next = S::Queries;
                }
            }

            S::Profile => {
                if action == A::SubmitProfile {
                    next = S::Queries;
                }
            }

            S::Queries => {
                if action == A::UpdateProfile {
                    next = S::ProfileUpdate;
                }
            }

            S::ProfileUpdate => {
                if action == A::SubmitProfile {
                    next = S::Queries;
                }
                if action == A::AbortProfileUpdate {
                    next = S::Queries;
                }
            }
        }
    }

    Session {
        state: next,
        ..session.clone()
    }
}

/// The landing screen, before the game has started.
pub fn is_start_state(state: SessionState) -> bool {
    matches!(state, SessionState::Init)
}

/// Screens that show queries (the teaser runs the same query loop).
pub fn is_query_state(state: SessionState) -> bool {
    matches!(state, SessionState::Teaser | SessionState::Queries)
}

/// Screens that show the profile form.
pub fn is_profile_state(state: SessionState) -> bool {
    matches!(state, SessionState::Profile | SessionState::ProfileUpdate)
}
