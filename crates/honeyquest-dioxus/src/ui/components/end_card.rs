use dioxus::prelude::*;

/// Shown when the user has answered every query in the dataset.
#[component]
pub fn EndCard(num_queries: u32) -> Element {
    rsx! {
        div { class: "EndCard card",
            div { class: "card-body",
                h3 { "🎉 That's it, you made it!" }
                p { "You answered all {num_queries} queries in the dataset." }
                p { class: "text-muted",
                    "Thank you for playing honeyquest. Your answers help us "
                    "understand what attackers find enticing and what scares them off."
                }
            }
        }
    }
}
