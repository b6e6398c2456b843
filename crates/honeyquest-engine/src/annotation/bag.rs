use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Overrides the text of the continue button
pub const ANNOTATION_BUTTON_TEXT: &str = "honeyquest/button-text";
/// Enables or disables that lines can be selected
pub const ANNOTATION_SELECT: &str = "honeyquest/select";
/// Enables or disables that lines can be selected as hacks
pub const ANNOTATION_SELECT_HACKS: &str = "honeyquest/select-hacks";
/// Enables or disables that lines can be selected as traps
pub const ANNOTATION_SELECT_TRAPS: &str = "honeyquest/select-traps";
/// Sets the maximum number of hacks that can be selected
pub const ANNOTATION_MAX_HACKS: &str = "honeyquest/max-hacks";
/// Sets the maximum number of traps that can be selected
pub const ANNOTATION_MAX_TRAPS: &str = "honeyquest/max-traps";
/// Restricts the lines that can be selected (using LAS)
pub const ANNOTATION_ALLOW_LINES: &str = "honeyquest/allow-lines";
/// Indicates that this is the last query of the tutorial
pub const ANNOTATION_TUTORIAL_END: &str = "honeyquest/tutorial-end";
/// Marks risky code fragments (using LAS)
pub const ANNOTATION_RISKY_LINES: &str = "risk/risky-lines";
/// Marks deceptive code fragments (using LAS)
pub const ANNOTATION_DECEPTIVE_LINES: &str = "honeypatch/deceptive-lines";

/// An ordered sequence of key/value maps attached to one query.
///
/// The query database stores annotations (and references) as a *list* of
/// small maps rather than one merged map, and lookup follows the list order:
/// the first map that contains the key wins, even if its value is falsy.
/// Later maps cannot override earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationBag {
    entries: Vec<serde_json::Map<String, Value>>,
}

impl AnnotationBag {
    pub fn new(entries: Vec<serde_json::Map<String, Value>>) -> Self {
        Self { entries }
    }

    /// The raw value of the first map containing `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find_map(|entry| entry.get(key))
    }

    /// Boolean lookup with a default for absent keys. Present values coerce:
    /// numbers are true unless zero, strings are true unless empty, null is
    /// false.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None => default,
            Some(Value::Bool(b)) => *b,
            Some(Value::Null) => false,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// Numeric lookup. A present but non-numeric value behaves like an
    /// absent key, so a broken annotation cannot accidentally impose a cap.
    pub fn get_u32(&self, key: &str) -> Option<u32> {
        match self.get(key)? {
            Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// String lookup; numeric and boolean scalars are stringified.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[serde_json::Map<String, Value>] {
        &self.entries
    }
}
