use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;

use honeyquest_api::ApiClient;
use honeyquest_engine::{Answer, Feedback, FeedbackAnswer, QueryResponse, Selection};

use super::{EndCard, ErrorBanner, QueryCard};
use crate::ui::Progress;

/// Fetches queries, submits answers, and propagates progress upstream.
///
/// The `on_submit` callback receives the posted response and the
/// tutorial-end flag of the answered query, and returns whether the next
/// query shall be fetched.
#[component]
pub fn QueryCardGroup(
    api: ApiClient,
    show_details: bool,
    on_submit: Callback<(QueryResponse, bool), bool>,
    on_progress_change: Callback<Progress>,
) -> Element {
    let api_submit = api.clone();
    let api_feedback = api.clone();

    let mut submitting = use_signal(|| false);
    let mut fetched_at = use_signal(|| None::<DateTime<Utc>>);

    // fetch the next query from the backend
    let mut query_res = use_resource(move || {
        let api = api.clone();
        async move { api.get_query().await }
    });

    // propagate progress upstream; the bar hides during the tutorial and
    // on errors. also remember when the query arrived, to measure the
    // response time later
    use_effect(move || {
        let state = query_res.read();
        match &*state {
            Some(Ok(wrapper)) => {
                fetched_at.set(Some(Utc::now()));
                if wrapper.query.is_tutorial() {
                    on_progress_change.call(Progress::default());
                } else {
                    on_progress_change.call(Progress {
                        active: true,
                        answered: wrapper.answered_queries,
                        total: wrapper.total_queries,
                    });
                }
            }
            Some(Err(_)) => on_progress_change.call(Progress::default()),
            None => {}
        }
    });

    // send the answer to the backend, then let the parent decide whether
    // to fetch the next query
    let on_click = Callback::new(move |selection: Selection| {
        let state = query_res.read();
        let Some(Ok(wrapper)) = &*state else { return };
        let query_id = wrapper.query.id.clone();
        let end_of_tutorial = wrapper.query.rules().tutorial_end;
        drop(state);

        let now = Utc::now();
        let response_time = match fetched_at() {
            Some(at) => now - at,
            None => Duration::zero(),
        };
        let response = QueryResponse {
            query_id,
            answer: Answer::from_selection(&selection, now, response_time),
        };

        let api = api_submit.clone();
        submitting.set(true);
        spawn(async move {
            match api.post_answer(&response).await {
                Ok(()) => {
                    if on_submit.call((response, end_of_tutorial)) {
                        query_res.restart();
                    }
                }
                Err(e) => log::warn!("failed to submit answer: {e}"),
            }
            submitting.set(false);
        });
    });

    let on_feedback = Callback::new(move |message: String| {
        let state = query_res.read();
        let query_id = match &*state {
            Some(Ok(wrapper)) => Some(wrapper.query.id.clone()),
            _ => None,
        };
        drop(state);

        let feedback = Feedback {
            query_id,
            answer: FeedbackAnswer {
                message,
                timestamp: Utc::now(),
            },
        };
        let api = api_feedback.clone();
        spawn(async move {
            if let Err(e) = api.post_feedback(&feedback).await {
                log::warn!("failed to submit feedback: {e}");
            }
        });
    });

    let state = query_res.read();
    match &*state {
        Some(Err(error)) => {
            if let Some((answered, _total)) = error.out_of_samples() {
                rsx! {
                    EndCard { num_queries: answered }
                }
            } else {
                rsx! {
                    ErrorBanner { message: error.to_string() }
                }
            }
        }
        Some(Ok(wrapper)) => rsx! {
            div { class: "card-group",
                // keyed by query id: a new query remounts the card with an
                // empty selection store before any of its rows render
                QueryCard {
                    key: "{wrapper.query.id}",
                    query: Some(wrapper.query.clone()),
                    invalid: submitting(),
                    show_details,
                    on_click,
                    on_feedback,
                }
            }
        },
        None => rsx! {
            div { class: "card-group",
                QueryCard {
                    query: None,
                    invalid: true,
                    show_details,
                    on_click,
                    on_feedback,
                }
            }
        },
    }
}
