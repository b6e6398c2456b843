use dioxus::prelude::*;

use honeyquest_api::ApiClient;
use honeyquest_engine::Profile;

/// A compact summary of the active profile with update and clear actions.
/// Clearing deletes the profile on the backend first, then resets the
/// session upstream.
#[component]
pub fn ProfileInfo(
    api: ApiClient,
    profile: Option<Profile>,
    on_update: Callback<()>,
    on_clear: Callback<()>,
) -> Element {
    let nickname = profile
        .as_ref()
        .and_then(|p| p.nickname.clone())
        .unwrap_or_else(|| "anonymous".to_string());
    let color = profile
        .as_ref()
        .map(|p| p.color.clone())
        .unwrap_or_else(|| "#7f7f7f".to_string());

    let handle_clear = move |_| {
        let api = api.clone();
        spawn(async move {
            match api.delete_profile().await {
                Ok(()) => on_clear.call(()),
                Err(e) => log::warn!("failed to delete profile: {e}"),
            }
        });
    };

    rsx! {
        div { class: "ProfileInfo",
            span { class: "profile-dot", style: "background-color: {color}" }
            if profile.is_some() {
                span { "Playing as {nickname}" }
            } else {
                span { class: "text-muted", "No profile yet" }
            }
            button { class: "btn btn-sm btn-outline-secondary", onclick: move |_| on_update.call(()), "Update profile" }
            button { class: "btn btn-sm btn-outline-danger", onclick: handle_clear, "Clear profile" }
        }
    }
}
