mod code_view;
mod end_card;
mod error_banner;
mod lead;
mod loading_spinner;
mod profile_card;
mod profile_info;
mod progress_bar;
mod query_card;
mod query_card_group;

pub use code_view::CodeView;
pub use end_card::EndCard;
pub use error_banner::ErrorBanner;
pub use lead::Lead;
pub use loading_spinner::LoadingSpinner;
pub use profile_card::ProfileCard;
pub use profile_info::ProfileInfo;
pub use progress_bar::ProgressBar;
pub use query_card::QueryCard;
pub use query_card_group::QueryCardGroup;
