//! Integration tests for the quiz flow boundary: query annotations drive
//! the policy, the policy drives the selection store, and the store's
//! contents become the submitted answer. Mirrors how the UI layer uses the
//! engine, without a live renderer.

use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;

use honeyquest_engine::session::{is_profile_state, is_query_state, is_start_state};
use honeyquest_engine::{
    Answer, MarkKind, Profile, Query, QueryResponse, Selection, Session, SessionAction,
    SessionState, next_state,
};

fn query(data: &str, annotations: serde_json::Value) -> Query {
    serde_json::from_value(json!({
        "id": "httpheaders/test",
        "label": "risky",
        "type": "httpheaders",
        "references": [],
        "annotations": annotations,
        "data": data,
    }))
    .unwrap()
}

#[test]
fn test_clicks_through_policy_produce_ordered_answer() {
    let query = query(
        "HTTP/1.1 200 OK\nServer: nginx\nSet-Cookie: admin=1\nX-Debug: on\nContent-Length: 0\n",
        json!([]),
    );
    let rules = query.rules();
    let mut selection = Selection::new();

    // the user works through the lines out of numeric order
    assert!(rules.click(4, MarkKind::Hack, &mut selection));
    assert!(rules.click(3, MarkKind::Trap, &mut selection));
    assert!(rules.click(2, MarkKind::Hack, &mut selection));

    let answer = Answer::from_selection(&selection, Utc::now(), Duration::seconds(12));
    let response = QueryResponse {
        query_id: query.id.clone(),
        answer,
    };

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(
        value["answer"]["lines"],
        json!([[4, "hack"], [3, "trap"], [2, "hack"]])
    );
}

#[test]
fn test_allow_lines_and_caps_from_real_annotations() {
    let query = query(
        "line one\nline two\nline three\nline four\n",
        json!([
            { "honeyquest/allow-lines": "l2-4" },
            { "honeyquest/max-hacks": 1 },
        ]),
    );
    let rules = query.rules();
    let mut selection = Selection::new();

    // line 1 is outside the allow-lines restriction
    assert!(!rules.click(1, MarkKind::Hack, &mut selection));
    assert!(rules.click(2, MarkKind::Hack, &mut selection));
    // the cap rejects a second hack but still allows deselecting the first
    assert!(!rules.click(3, MarkKind::Hack, &mut selection));
    assert!(rules.click(2, MarkKind::Hack, &mut selection));
    assert!(selection.is_empty());
}

#[test]
fn test_selection_reset_happens_before_new_query_renders() {
    let first = query("a\nb\nc\n", json!([]));
    let rules = first.rules();
    let mut selection = Selection::new();
    rules.click(1, MarkKind::Hack, &mut selection);
    rules.click(2, MarkKind::Trap, &mut selection);

    // the content changes: reset must complete before any line view of the
    // new query is computed, so no stale mark can leak into its rows
    let second = query("x\ny\n", json!([]));
    selection.reset();

    let rules = second.rules();
    for (index, _line) in second.lines().enumerate() {
        let view = rules.line_view(index as u32 + 1, &selection);
        assert_eq!(view.hack_ordinal, None);
        assert_eq!(view.trap_ordinal, None);
        assert!(!view.highlight_hack);
        assert!(!view.highlight_trap);
    }
    assert!(selection.is_empty());
}

#[test]
fn test_full_session_walkthrough_of_a_new_user() {
    // fresh session on the landing page
    let mut session = Session::default();
    assert!(is_start_state(session.state));

    // the user starts without a profile and lands in the teaser
    session = next_state(&session, SessionAction::Start);
    assert_eq!(session.state, SessionState::Teaser);
    assert!(is_query_state(session.state));

    // tutorial queries are answered; the caller mutates the counters
    // before asking for the next state
    for _ in 0..3 {
        session.query_count += 1;
        session = next_state(&session, SessionAction::NextQuery);
        assert_eq!(session.state, SessionState::Teaser);
    }

    // the last tutorial query flips the flag and forces the profile page
    session.query_count += 1;
    session.end_of_tutorial = true;
    session = next_state(&session, SessionAction::NextQuery);
    assert_eq!(session.state, SessionState::Profile);
    assert!(is_profile_state(session.state));

    // submitting the profile enters the main query loop
    session.profile = Some(Profile::default());
    session = next_state(&session, SessionAction::SubmitProfile);
    assert_eq!(session.state, SessionState::Queries);

    // profile update round trip
    session = next_state(&session, SessionAction::UpdateProfile);
    assert_eq!(session.state, SessionState::ProfileUpdate);
    session = next_state(&session, SessionAction::AbortProfileUpdate);
    assert_eq!(session.state, SessionState::Queries);

    // clearing the profile resets the whole flow
    session.profile = None;
    session.query_count = 0;
    session = next_state(&session, SessionAction::ClearProfile);
    assert_eq!(session.state, SessionState::Init);
}

#[test]
fn test_returning_user_skips_teaser_and_profile() {
    let mut session = Session {
        profile: Some(Profile::default()),
        ..Default::default()
    };
    session = next_state(&session, SessionAction::Start);
    assert_eq!(session.state, SessionState::Queries);
}

#[test]
fn test_screen_predicates_partition_every_reachable_state() {
    // breadth-first over the transition graph from Init
    let actions = [
        SessionAction::Start,
        SessionAction::NextQuery,
        SessionAction::SubmitProfile,
        SessionAction::UpdateProfile,
        SessionAction::AbortProfileUpdate,
        SessionAction::ClearProfile,
    ];

    let mut pending = vec![Session::default(), Session {
        profile: Some(Profile::default()),
        end_of_tutorial: true,
        ..Default::default()
    }];
    let mut visited: Vec<SessionState> = Vec::new();

    while let Some(session) = pending.pop() {
        if visited.contains(&session.state) {
            continue;
        }
        visited.push(session.state);

        let flags = [
            is_start_state(session.state),
            is_query_state(session.state),
            is_profile_state(session.state),
        ];
        assert_eq!(
            flags.iter().filter(|&&f| f).count(),
            1,
            "exactly one screen predicate must hold in {:?}",
            session.state
        );

        for action in actions {
            pending.push(next_state(&session, action));
        }
    }
}
