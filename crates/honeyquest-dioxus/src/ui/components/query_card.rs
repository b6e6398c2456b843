use dioxus::prelude::*;

use honeyquest_engine::{Query, QueryRules, Selection};

use super::{CodeView, LoadingSpinner};
use crate::ui::references;

/// Debug details of a query, preformatted for the admin footer.
struct QueryDetails {
    id: String,
    query_type: String,
    label: String,
    annotations: String,
    references: String,
}

fn query_details(query: &Query) -> QueryDetails {
    QueryDetails {
        id: query.id.clone(),
        query_type: query.query_type.clone(),
        label: format!("{:?}", query.label),
        annotations: serde_json::to_string(&query.annotations).unwrap_or_default(),
        references: serde_json::to_string(&query.references).unwrap_or_default(),
    }
}

/// A card that shows a query and navigation buttons.
///
/// Owns the selection store for the query on display; the store is reset
/// whenever the query content changes, before the new line rows render, so
/// no mark can leak from one query into the next.
#[component]
pub fn QueryCard(
    query: Option<Query>,
    invalid: bool,
    show_details: bool,
    on_click: Callback<Selection>,
    on_feedback: Callback<String>,
) -> Element {
    let mut selection = use_signal(Selection::new);
    let mut feedback_open = use_signal(|| false);
    let mut feedback_text = use_signal(String::new);

    // clear the selection when the query content changes
    let code = query.as_ref().map(|q| q.data.clone()).unwrap_or_default();
    use_effect(use_reactive!(|code| {
        let _ = &code;
        selection.write().reset();
    }));

    let rules = query.as_ref().map(Query::rules).unwrap_or_default();
    // do not gate on `invalid` alone to avoid a flashing card; it only
    // pauses selection while a submission is in flight
    let rules = QueryRules {
        selectable: rules.selectable && !invalid,
        ..rules
    };
    let button_text = rules.button_text.clone();

    let has_marks = !selection.read().is_empty();
    let submit_label = button_text
        .clone()
        .unwrap_or_else(|| "Submit selection".to_string());
    let skip_label =
        button_text.unwrap_or_else(|| "This query is neither risky nor deceptive".to_string());

    let query_type = query
        .as_ref()
        .map(|q| q.query_type.clone())
        .unwrap_or_default();
    let is_tutorial = query.as_ref().is_some_and(Query::is_tutorial);
    let nice_name = references::nice_query_type_name(&query_type);
    let type_desc = references::type_description(&query_type);
    let exploit_desc = references::exploit_description(&query_type);
    let trap_desc = references::trap_description(&query_type);

    let handle_answer = move |_| on_click.call(selection());

    let send_feedback = move |_| {
        let message = feedback_text();
        if !message.trim().is_empty() {
            on_feedback.call(message);
            feedback_text.set(String::new());
        }
        feedback_open.set(false);
    };

    rsx! {
        div { class: "QueryCard card",
            div { class: "card-body",
                div { class: "QueryCardHeader",
                    if query.is_some() && !is_tutorial {
                        p { class: "intro",
                            "Assume you are a hacker seeing the following "
                            mark { "{nice_name}" }
                            span { class: "help-icon", title: "{type_desc}", "ⓘ" }
                            br {}
                            span { class: "small text-muted", "⚡ {exploit_desc}" }
                            br {}
                            span { class: "small text-muted", "📌 {trap_desc}" }
                        }
                    }
                    div { class: "answer-buttons",
                        if has_marks {
                            button {
                                class: "AnswerButton btn btn-primary",
                                disabled: query.is_none() || invalid,
                                onclick: handle_answer,
                                "▶ {submit_label}"
                            }
                        } else {
                            button {
                                class: "AnswerButton btn btn-light",
                                disabled: query.is_none() || invalid,
                                onclick: handle_answer,
                                "▶ {skip_label}"
                            }
                        }
                    }
                }

                if query.is_some() {
                    CodeView { code, rules, selection }
                } else {
                    LoadingSpinner {}
                }

                div { class: "feedback-row",
                    button {
                        class: "FeedbackButton btn btn-outline-secondary",
                        title: "Send feedback or report a mistake in this query",
                        onclick: move |_| {
                            let open = feedback_open();
                            feedback_open.set(!open);
                        },
                        "💬"
                    }
                }
                if feedback_open() {
                    div { class: "feedback-form",
                        textarea {
                            placeholder: "Describe the problem with this query",
                            value: "{feedback_text}",
                            oninput: move |event| feedback_text.set(event.value()),
                        }
                        button { class: "btn btn-secondary", onclick: send_feedback, "Send feedback" }
                    }
                }
            }

            if let Some(details) = query.as_ref().filter(|_| show_details).map(query_details) {
                div { class: "card-footer small text-muted",
                    div { "id: {details.id}" }
                    div { "type: {details.query_type}" }
                    div { "label: {details.label}" }
                    div { "annotations: {details.annotations}" }
                    div { "references: {details.references}" }
                }
            }
        }
    }
}
