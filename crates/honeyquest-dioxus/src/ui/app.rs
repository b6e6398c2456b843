use dioxus::prelude::*;

use honeyquest_api::ApiClient;
use honeyquest_engine::session::{is_profile_state, is_query_state, is_start_state};
use honeyquest_engine::{Profile, QueryResponse, Session, SessionAction, SessionState, next_state};

use super::components::{Lead, ProfileCard, ProfileInfo, ProgressBar, QueryCardGroup};
use super::{Progress, flow};

const HONEYQUEST_CSS: &str = include_str!("../../assets/honeyquest.css");

#[component]
pub fn App(server_url: String, admin_token: Option<String>) -> Element {
    let api = use_signal(|| match ApiClient::new(&server_url) {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!("Error creating backend client: {e}");
            None
        }
    });

    let mut session = use_signal(Session::default);
    let mut consent = use_signal(|| false);
    let mut progress = use_signal(Progress::default);

    // on startup: authenticate the admin backdoor token (if any) and check
    // if a user profile is already known to the backend
    use_future(move || {
        let admin_token = admin_token.clone();
        async move {
            let Some(client) = api() else { return };

            if let Some(token) = admin_token {
                match client.post_admin_auth(&token).await {
                    Ok(()) => session.write().show_admin_view = true,
                    Err(e) => log::warn!("admin auth failed: {e}"),
                }
            }

            match client.get_profile().await {
                Ok(Some(profile)) => {
                    let next = flow::advance_after_profile_submit(&session(), profile);
                    session.set(next);
                }
                Ok(None) => {}
                Err(e) => log::warn!("could not fetch profile: {e}"),
            }
        }
    });

    let current = session();
    let is_start_page = is_start_state(current.state);
    let is_queries_page = is_query_state(current.state);
    let is_profile_page = is_profile_state(current.state);
    debug_assert_eq!(
        [is_start_page, is_queries_page, is_profile_page]
            .iter()
            .filter(|&&f| f)
            .count(),
        1
    );

    /* lead controllers */

    let on_start = Callback::new(move |_: ()| {
        let next = next_state(&session(), SessionAction::Start);
        session.set(next);
    });

    let on_consent = Callback::new(move |given: bool| consent.set(given));

    /* query card controllers */

    let on_query_submit = Callback::new(
        move |(_response, end_of_tutorial): (QueryResponse, bool)| -> bool {
            let (pending, continue_fetching) =
                flow::advance_after_answer(&session(), end_of_tutorial);
            session.set(pending);
            continue_fetching
        },
    );

    /* profile card controllers */

    let on_profile_submit = Callback::new(move |profile: Profile| {
        let next = flow::advance_after_profile_submit(&session(), profile);
        session.set(next);
    });

    let on_profile_update = Callback::new(move |_: ()| {
        let next = next_state(&session(), SessionAction::UpdateProfile);
        session.set(next);
    });

    let on_profile_clear = Callback::new(move |_: ()| {
        let next = flow::clear_session(&session());
        session.set(next);
    });

    let on_profile_abort = Callback::new(move |_: ()| {
        let next = next_state(&session(), SessionAction::AbortProfileUpdate);
        session.set(next);
    });

    let on_progress_change = Callback::new(move |p: Progress| progress.set(p));

    let Some(client) = api() else {
        return rsx! {
            style { {HONEYQUEST_CSS} }
            div { class: "error-screen",
                h1 { "honeyquest" }
                p { "The backend url '{server_url}' is not usable. Check your configuration." }
            }
        };
    };

    let progress_color = current.profile.as_ref().map(|p| p.color.clone());

    rsx! {
        style { {HONEYQUEST_CSS} }
        main { class: "app-container",
            div { class: "header-row",
                Lead {
                    show_intro: is_start_page,
                    show_summary: is_start_page && current.profile.is_some(),
                    consent_given: consent(),
                    on_consent,
                    on_start,
                }
                if !is_start_page {
                    ProfileInfo {
                        api: client.clone(),
                        profile: current.profile.clone(),
                        on_update: on_profile_update,
                        on_clear: on_profile_clear,
                    }
                }
            }

            if is_queries_page {
                ProgressBar { progress: progress(), color: progress_color }
                QueryCardGroup {
                    api: client.clone(),
                    show_details: current.show_admin_view,
                    on_submit: on_query_submit,
                    on_progress_change,
                }
            }

            if is_profile_page {
                ProfileCard {
                    api: client,
                    init_state: current.profile.clone(),
                    show_abort: current.state == SessionState::ProfileUpdate,
                    on_submit: on_profile_submit,
                    on_abort: on_profile_abort,
                }
            }
        }
    }
}
