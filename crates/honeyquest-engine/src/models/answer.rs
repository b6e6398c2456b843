use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::selection::{MarkKind, Selection};

/// One marked line in an answer, serialized as a `[line, "hack"|"trap"]`
/// tuple on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAnswer(pub u32, pub MarkKind);

/// The marks that a user placed on the lines of a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// The timestamp when the answer was submitted
    pub timestamp: DateTime<Utc>,
    /// Marked lines in selection order — the order in which the user
    /// would exploit something
    #[serde(default)]
    pub lines: Vec<LineAnswer>,
    /// The time it took the user to respond, as an ISO 8601 duration
    pub response_time: String,
}

impl Answer {
    /// Build an answer from the current selection, preserving the store's
    /// insertion order exactly.
    pub fn from_selection(
        selection: &Selection,
        timestamp: DateTime<Utc>,
        response_time: Duration,
    ) -> Self {
        let lines = selection
            .marks()
            .iter()
            .map(|mark| LineAnswer(mark.line, mark.kind))
            .collect();
        Self {
            timestamp,
            lines,
            response_time: iso8601_duration(response_time),
        }
    }

    pub fn hacks(&self) -> BTreeSet<u32> {
        self.lines_of(MarkKind::Hack)
    }

    pub fn traps(&self) -> BTreeSet<u32> {
        self.lines_of(MarkKind::Trap)
    }

    fn lines_of(&self, kind: MarkKind) -> BTreeSet<u32> {
        self.lines
            .iter()
            .filter(|answer| answer.1 == kind)
            .map(|answer| answer.0)
            .collect()
    }
}

/// A user response to some query, as posted to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// The ID of the original query to answer
    pub query_id: String,
    pub answer: Answer,
}

/// Free-text user feedback, optionally tied to a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub query_id: Option<String>,
    pub answer: FeedbackAnswer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackAnswer {
    /// The message the user provided in the feedback
    pub message: String,
    /// The timestamp when the feedback was submitted
    pub timestamp: DateTime<Utc>,
}

/// Format a duration as an ISO 8601 duration string, e.g. `PT4.123S` or
/// `PT2M30S`. Negative durations clamp to zero.
pub fn iso8601_duration(duration: Duration) -> String {
    let total_ms = duration.num_milliseconds().max(0);
    let mut seconds = total_ms / 1000;
    let millis = total_ms % 1000;

    let days = seconds / 86_400;
    seconds %= 86_400;
    let hours = seconds / 3_600;
    seconds %= 3_600;
    let minutes = seconds / 60;
    seconds %= 60;

    let mut out = String::from("P");
    if days > 0 {
        out.push_str(&format!("{days}D"));
    }

    out.push('T');
    if hours > 0 {
        out.push_str(&format!("{hours}H"));
    }
    if minutes > 0 {
        out.push_str(&format!("{minutes}M"));
    }
    if millis > 0 {
        out.push_str(&format!("{seconds}.{millis:03}S"));
    } else if seconds > 0 || (days == 0 && hours == 0 && minutes == 0) {
        out.push_str(&format!("{seconds}S"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Mark;
    use chrono::TimeZone;
    use serde_json::json;

    fn sample_selection() -> Selection {
        let mut selection = Selection::new();
        selection.toggle(Mark::hack(3));
        selection.toggle(Mark::trap(1));
        selection.toggle(Mark::hack(5));
        selection
    }

    #[test]
    fn test_answer_preserves_selection_order() {
        let answer = Answer::from_selection(
            &sample_selection(),
            Utc.with_ymd_and_hms(2024, 4, 2, 12, 0, 0).unwrap(),
            Duration::seconds(4),
        );
        assert_eq!(
            answer.lines,
            vec![
                LineAnswer(3, MarkKind::Hack),
                LineAnswer(1, MarkKind::Trap),
                LineAnswer(5, MarkKind::Hack),
            ]
        );
    }

    #[test]
    fn test_lines_serialize_as_tuples() {
        let answer = Answer::from_selection(
            &sample_selection(),
            Utc.with_ymd_and_hms(2024, 4, 2, 12, 0, 0).unwrap(),
            Duration::milliseconds(1500),
        );
        let value = serde_json::to_value(&answer).unwrap();
        assert_eq!(
            value["lines"],
            json!([[3, "hack"], [1, "trap"], [5, "hack"]])
        );
        assert_eq!(value["response_time"], "PT1.500S");
    }

    #[test]
    fn test_response_round_trip() {
        let response = QueryResponse {
            query_id: "httpheaders/abc123".into(),
            answer: Answer::from_selection(
                &sample_selection(),
                Utc.with_ymd_and_hms(2024, 4, 2, 12, 0, 0).unwrap(),
                Duration::seconds(90),
            ),
        };
        let value = serde_json::to_value(&response).unwrap();
        let back: QueryResponse = serde_json::from_value(value).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn test_hacks_and_traps_split() {
        let answer = Answer::from_selection(
            &sample_selection(),
            Utc::now(),
            Duration::zero(),
        );
        assert_eq!(answer.hacks(), [3, 5].into_iter().collect());
        assert_eq!(answer.traps(), [1].into_iter().collect());
    }

    #[test]
    fn test_empty_selection_yields_empty_lines() {
        let answer = Answer::from_selection(&Selection::new(), Utc::now(), Duration::zero());
        assert!(answer.lines.is_empty());
        assert_eq!(answer.response_time, "PT0S");
    }

    #[test]
    fn test_iso8601_duration_formats() {
        assert_eq!(iso8601_duration(Duration::zero()), "PT0S");
        assert_eq!(iso8601_duration(Duration::milliseconds(250)), "PT0.250S");
        assert_eq!(iso8601_duration(Duration::seconds(4)), "PT4S");
        assert_eq!(iso8601_duration(Duration::milliseconds(4123)), "PT4.123S");
        assert_eq!(iso8601_duration(Duration::seconds(150)), "PT2M30S");
        assert_eq!(iso8601_duration(Duration::seconds(3600)), "PT1H");
        assert_eq!(iso8601_duration(Duration::seconds(90061)), "P1DT1H1M1S");
    }

    #[test]
    fn test_iso8601_duration_clamps_negative() {
        assert_eq!(iso8601_duration(Duration::seconds(-5)), "PT0S");
    }

    #[test]
    fn test_feedback_serializes() {
        let feedback = Feedback {
            query_id: Some("htaccess/x1".into()),
            answer: FeedbackAnswer {
                message: "typo in line 3".into(),
                timestamp: Utc.with_ymd_and_hms(2024, 4, 2, 12, 0, 0).unwrap(),
            },
        };
        let value = serde_json::to_value(&feedback).unwrap();
        assert_eq!(value["query_id"], "htaccess/x1");
        assert_eq!(value["answer"]["message"], "typo in line 3");
    }
}
