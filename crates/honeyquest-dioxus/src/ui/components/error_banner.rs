use dioxus::prelude::*;

/// Opaque backend failures surface here; the core never interprets them.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "ErrorBanner",
            strong { "Something went wrong. " }
            span { "{message}" }
        }
    }
}
