use dioxus::prelude::*;

/// The lead card on the landing page: introduces the game, asks for data
/// privacy consent, and starts the quest.
#[component]
pub fn Lead(
    show_intro: bool,
    show_summary: bool,
    consent_given: bool,
    on_consent: Callback<bool>,
    on_start: Callback<()>,
) -> Element {
    let start_label = if show_summary {
        "Continue playing"
    } else {
        "Start the quest"
    };

    rsx! {
        div { class: "Lead",
            h1 { "🍯 honeyquest" }
            h2 { "Would you fall for a honeypot?" }

            if show_intro {
                p {
                    "Honeyquest shows you snippets of web traffic, configuration "
                    "files, and filesystem listings. Think like a hacker: mark the "
                    "lines you would exploit with ⚡ and the lines you believe are "
                    "traps set up to catch you with 📌. You can also just move on "
                    "if a snippet looks neither risky nor deceptive."
                }
                if show_summary {
                    p { class: "text-muted",
                        "Welcome back! Your profile is already set up, so you will "
                        "jump straight back into the queries."
                    }
                }
                div { class: "consent-row",
                    label {
                        input {
                            r#type: "checkbox",
                            checked: consent_given,
                            onchange: move |event| on_consent.call(event.checked()),
                        }
                        " I agree that my anonymous answers are stored for research"
                    }
                }
                button {
                    class: "btn btn-primary StartButton",
                    disabled: !consent_given,
                    onclick: move |_| on_start.call(()),
                    "{start_label}"
                }
            }
        }
    }
}
