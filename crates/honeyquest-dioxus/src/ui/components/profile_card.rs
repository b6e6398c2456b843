use dioxus::prelude::*;

use honeyquest_api::ApiClient;
use honeyquest_engine::{Profile, ProfileJob, ProfileRank};

/// Colors a profile can tag its progress bar with. New profiles get one
/// assigned from the current clock tick.
const PROFILE_COLORS: [&str; 6] = [
    "#3ec852", "#2c8ddb", "#e6b117", "#d24d57", "#9b59b6", "#16a085",
];

fn assign_color() -> String {
    let millis = chrono::Utc::now().timestamp_subsec_millis() as usize;
    PROFILE_COLORS[millis % PROFILE_COLORS.len()].to_string()
}

/// A card that asks for the user's profile. Stores the profile on the
/// backend first and only then reports it upstream.
#[component]
pub fn ProfileCard(
    api: ApiClient,
    init_state: Option<Profile>,
    show_abort: bool,
    on_submit: Callback<Profile>,
    on_abort: Callback<()>,
) -> Element {
    let mut form = use_signal(move || {
        init_state.clone().unwrap_or_else(|| Profile {
            color: assign_color(),
            ..Default::default()
        })
    });

    let current = form();
    let job_value = current.job.map(job_key).unwrap_or("");
    let rank_value = current.rank.map(rank_key).unwrap_or("");
    let years_value = current
        .years
        .map(|y| y.to_string())
        .unwrap_or_default();
    let nickname_value = current.nickname.clone().unwrap_or_default();

    let handle_submit = move |_| {
        let profile = form();
        let api = api.clone();
        spawn(async move {
            match api.put_profile(&profile).await {
                Ok(()) => on_submit.call(profile),
                Err(e) => log::warn!("failed to store profile: {e}"),
            }
        });
    };

    rsx! {
        div { class: "ProfileCard card",
            div { class: "card-body",
                h5 { class: "card-title", "👤 Wait, please tell us more about yourself first" }

                div { class: "form-field",
                    label { "What describes " strong { "your current profession" } " best?" }
                    select {
                        value: "{job_value}",
                        onchange: move |event| form.write().job = parse_job(&event.value()),
                        option { value: "" }
                        option { value: "student", "Student" }
                        option { value: "dev", "Development (Developer, Engineer, Architect)" }
                        option { value: "ops", "Operations (System Administrator, SRE)" }
                        option { value: "secops", "Security Operations (Penetration Tester, Incident Detection and Response)" }
                        option { value: "biz", "Business (Manager, Leader, Sales, Marketing)" }
                        option { value: "research", "Research (Researcher, Scientist, Innovator)" }
                        option { value: "other", "None of the above" }
                    }
                }

                div { class: "form-field",
                    label {
                        "Roughly, " strong { "how many years" }
                        " have you been professionally involved in cyber security?"
                    }
                    input {
                        r#type: "number",
                        min: "0",
                        max: "100",
                        value: "{years_value}",
                        oninput: move |event| form.write().years = event.value().parse().ok(),
                    }
                }

                div { class: "form-field",
                    label {
                        "How would you describe " strong { "your secure coding skill level" }
                        " at the moment?"
                    }
                    select {
                        value: "{rank_value}",
                        onchange: move |event| form.write().rank = parse_rank(&event.value()),
                        option { value: "" }
                        option { value: "none", "None: What do you mean by secure coding?" }
                        option { value: "little", "Little: I only heard about a few concepts." }
                        option { value: "good", "Good: I understand the essentials, but still need guidance sometimes." }
                        option { value: "advanced", "Advanced: I apply secure coding practices on my own." }
                        option { value: "expert", "Expert: I teach secure coding to others." }
                    }
                }

                div { class: "form-field",
                    label { "Pick a " strong { "nickname" } " (optional)" }
                    input {
                        r#type: "text",
                        value: "{nickname_value}",
                        oninput: move |event| {
                            let value = event.value();
                            form.write().nickname =
                                if value.is_empty() { None } else { Some(value) };
                        },
                    }
                }

                div { class: "form-actions",
                    button { class: "btn btn-primary", onclick: handle_submit, "Save profile" }
                    if show_abort {
                        button {
                            class: "btn btn-light",
                            onclick: move |_| on_abort.call(()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

fn job_key(job: ProfileJob) -> &'static str {
    match job {
        ProfileJob::Student => "student",
        ProfileJob::Dev => "dev",
        ProfileJob::Ops => "ops",
        ProfileJob::Secops => "secops",
        ProfileJob::Biz => "biz",
        ProfileJob::Research => "research",
        ProfileJob::Other => "other",
    }
}

fn parse_job(value: &str) -> Option<ProfileJob> {
    match value {
        "student" => Some(ProfileJob::Student),
        "dev" => Some(ProfileJob::Dev),
        "ops" => Some(ProfileJob::Ops),
        "secops" => Some(ProfileJob::Secops),
        "biz" => Some(ProfileJob::Biz),
        "research" => Some(ProfileJob::Research),
        "other" => Some(ProfileJob::Other),
        _ => None,
    }
}

fn rank_key(rank: ProfileRank) -> &'static str {
    match rank {
        ProfileRank::None => "none",
        ProfileRank::Little => "little",
        ProfileRank::Good => "good",
        ProfileRank::Advanced => "advanced",
        ProfileRank::Expert => "expert",
    }
}

fn parse_rank(value: &str) -> Option<ProfileRank> {
    match value {
        "none" => Some(ProfileRank::None),
        "little" => Some(ProfileRank::Little),
        "good" => Some(ProfileRank::Good),
        "advanced" => Some(ProfileRank::Advanced),
        "expert" => Some(ProfileRank::Expert),
        _ => None,
    }
}
