use dioxus::prelude::*;

use crate::ui::Progress;

/// Progress through the query dataset, colored with the profile color.
/// Stays in the layout but invisible while inactive, so the cards below
/// do not jump around.
#[component]
pub fn ProgressBar(progress: Progress, color: Option<String>) -> Element {
    let percent = if progress.total > 0 {
        (progress.answered as f64 / progress.total as f64 * 100.0).round()
    } else {
        0.0
    };
    let color = color.unwrap_or_else(|| "#3ec852".to_string());
    let visibility = if progress.active { "visible" } else { "hidden" };

    rsx! {
        div { class: "ProgressBar", style: "visibility: {visibility}",
            div { class: "progress-track",
                div {
                    class: "progress-fill",
                    style: "width: {percent}%; background-color: {color}",
                }
            }
            span { class: "progress-label small text-muted",
                "{progress.answered} of {progress.total} queries answered"
            }
        }
    }
}
