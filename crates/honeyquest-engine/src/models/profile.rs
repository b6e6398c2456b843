use serde::{Deserialize, Serialize};

/// The occupation a user reported about themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileJob {
    Student,
    Dev,
    Ops,
    Secops,
    Biz,
    Research,
    Other,
}

/// Self-reported experience with honeypots and deception technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileRank {
    None,
    Little,
    Good,
    Advanced,
    Expert,
}

/// The user profile. All demographic fields are optional; the color tags
/// the user's progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub nickname: Option<String>,
    pub job: Option<ProfileJob>,
    /// Years of experience in the reported job
    pub years: Option<u32>,
    pub rank: Option<ProfileRank>,
    pub color: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            nickname: None,
            job: None,
            years: None,
            rank: None,
            color: "#7f7f7f".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_round_trip() {
        let profile = Profile {
            nickname: Some("mallory".into()),
            job: Some(ProfileJob::Secops),
            years: Some(4),
            rank: Some(ProfileRank::Advanced),
            color: "#3ec852".into(),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["job"], "secops");
        assert_eq!(value["rank"], "advanced");
        let back: Profile = serde_json::from_value(value).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_profile_with_nulls_deserializes() {
        let profile: Profile = serde_json::from_value(json!({
            "nickname": null,
            "job": null,
            "years": null,
            "rank": null,
            "color": "#112233",
        }))
        .unwrap();
        assert_eq!(profile.nickname, None);
        assert_eq!(profile.rank, None);
    }

    #[test]
    fn test_rank_none_is_a_value_not_an_absence() {
        // "none" means the user reported no experience, which is
        // different from not answering the question at all
        let profile: Profile = serde_json::from_value(json!({
            "nickname": "alice",
            "job": "dev",
            "years": 1,
            "rank": "none",
            "color": "#112233",
        }))
        .unwrap();
        assert_eq!(profile.rank, Some(ProfileRank::None));
    }
}
