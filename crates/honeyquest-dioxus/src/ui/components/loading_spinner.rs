use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "LoadingSpinner",
            span { class: "spinner" }
            span { class: "text-muted", "Loading the next query…" }
        }
    }
}
