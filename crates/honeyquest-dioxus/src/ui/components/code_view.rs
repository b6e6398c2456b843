use dioxus::prelude::*;

use honeyquest_engine::{MarkKind, QueryRules, Selection};

use crate::ui::classes;

/// The selectable line table of a query. Every line gets a hack cell on the
/// left and a trap cell on the right; the annotation policy decides which
/// cells react to clicks, and the sequence numbers next to the icons follow
/// the selection order per kind.
#[component]
pub fn CodeView(code: String, rules: QueryRules, selection: Signal<Selection>) -> Element {
    let current = selection();

    let line_rows = code.lines().enumerate().map(|(index, line)| {
        let number = index as u32 + 1;
        let view = rules.line_view(number, &current);

        let tr_class = classes("", &[
            ("hack", view.highlight_hack),
            ("trap", view.highlight_trap),
        ]);
        let td_hack = classes("TdHack", &[
            ("selectable", view.hack_enabled),
            ("selected", view.highlight_hack),
        ]);
        let td_trap = classes("TdTrap", &[
            ("selectable", view.trap_enabled),
            ("selected", view.highlight_trap),
        ]);

        let hack_ordinal = view.hack_ordinal.map(|n| n.to_string()).unwrap_or_default();
        let trap_ordinal = view.trap_ordinal.map(|n| n.to_string()).unwrap_or_default();

        let hack_rules = rules.clone();
        let trap_rules = rules.clone();

        rsx! {
            tr { key: "{index}", class: "{tr_class}",
                td {
                    class: "{td_hack}",
                    onclick: move |_| {
                        let mut store = selection.write();
                        hack_rules.click(number, MarkKind::Hack, &mut store);
                    },
                    span { "{hack_ordinal}" }
                    span { class: "mark-icon", "⚡" }
                }
                td { class: "TdText", "{line}" }
                td {
                    class: "{td_trap}",
                    onclick: move |_| {
                        let mut store = selection.write();
                        trap_rules.click(number, MarkKind::Trap, &mut store);
                    },
                    span { class: "mark-icon", "📌" }
                    span { "{trap_ordinal}" }
                }
            }
        }
    });

    let clazz = classes("CodeView", &[("selectable", rules.selectable)]);

    rsx! {
        div { class: "{clazz}",
            table {
                tbody { {line_rows} }
            }
        }
    }
}
