//! Analysis value objects — immutable result types for one orchestration run
//!
//! - [`ToolValue`] - Polymorphic parsed value produced by a tool
//! - [`Outcome`] - Terminal state of one tool configuration (`done`/`error`)
//! - [`OutcomeMap`] - Ordered per-configuration outcomes for a whole run

use crate::analysis::entities::ColumnId;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};

/// Polymorphic value produced by an extraction tool.
///
/// Free-text tools produce `Text`; structured tools produce `List` or
/// `Map` depending on what their prompt asks the model for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolValue {
    /// Verbatim provider text (summary, methodology, ...)
    Text(String),
    /// Ordered list of strings or structured items
    List(Vec<serde_json::Value>),
    /// String-keyed mapping (metadata, metrics, ...)
    Map(serde_json::Map<String, serde_json::Value>),
}

impl ToolValue {
    pub fn text(s: impl Into<String>) -> Self {
        ToolValue::Text(s.into())
    }

    pub fn empty_list() -> Self {
        ToolValue::List(Vec::new())
    }

    /// Wrap an already-parsed JSON value by its kind.
    ///
    /// Scalars other than strings are rare model outputs; they are kept as
    /// their textual rendering rather than rejected.
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => ToolValue::Text(s),
            serde_json::Value::Array(items) => ToolValue::List(items),
            serde_json::Value::Object(map) => ToolValue::Map(map),
            other => ToolValue::Text(other.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToolValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[serde_json::Value]> {
        match self {
            ToolValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        match self {
            ToolValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// Terminal status of one tool configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Done,
    Error,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            OutcomeStatus::Done => "done",
            OutcomeStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of running one tool configuration.
///
/// Exactly one of `value` (when `done`) or `error_message` (when `error`)
/// is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: OutcomeStatus,
    pub value: Option<ToolValue>,
    pub error_message: Option<String>,
}

impl Outcome {
    /// Create a successful outcome carrying the parsed value
    pub fn done(value: ToolValue) -> Self {
        Self {
            status: OutcomeStatus::Done,
            value: Some(value),
            error_message: None,
        }
    }

    /// Create a failed outcome carrying the terminal error message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: OutcomeStatus::Error,
            value: None,
            error_message: Some(message.into()),
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == OutcomeStatus::Done
    }
}

/// Ordered map from tool-configuration identity to outcome.
///
/// Insertion order follows the input tool-config order, and one run
/// produces exactly one entry per input configuration. Backed by a `Vec`
/// so serialization and iteration preserve that order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutcomeMap {
    entries: Vec<(ColumnId, Outcome)>,
}

impl OutcomeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an outcome for a configuration.
    ///
    /// Callers are expected to insert each id once; a duplicate id replaces
    /// the earlier entry in place so the one-entry-per-config invariant
    /// holds even for ill-formed input.
    pub fn insert(&mut self, id: ColumnId, outcome: Outcome) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            entry.1 = outcome;
        } else {
            self.entries.push((id, outcome));
        }
    }

    pub fn get(&self, id: &ColumnId) -> Option<&Outcome> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, outcome)| outcome)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnId, &Outcome)> {
        self.entries.iter().map(|(id, outcome)| (id, outcome))
    }

    /// Count of `done` entries
    pub fn done_count(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_done()).count()
    }

    /// Count of `error` entries
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|(_, o)| !o.is_done()).count()
    }
}

impl Serialize for OutcomeMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, outcome) in &self.entries {
            map.serialize_entry(id, outcome)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for OutcomeMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct MapVisitor;

        impl<'de> serde::de::Visitor<'de> for MapVisitor {
            type Value = OutcomeMap;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of column id to outcome")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut outcomes = OutcomeMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, outcome)) = access.next_entry::<ColumnId, Outcome>()? {
                    outcomes.insert(id, outcome);
                }
                Ok(outcomes)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}

impl IntoIterator for OutcomeMap {
    type Item = (ColumnId, Outcome);
    type IntoIter = std::vec::IntoIter<(ColumnId, Outcome)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
