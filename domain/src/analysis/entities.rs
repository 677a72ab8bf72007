//! Analysis entities: tool configurations and their identities

use serde::{Deserialize, Serialize};

/// Identity of one tool configuration within a run (Value Object)
///
/// The surrounding application typically uses a database column id here;
/// the core treats it as opaque. It keys the [`OutcomeMap`]
/// (`crate::analysis::value_objects::OutcomeMap`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        ColumnId::new(s)
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        ColumnId::new(s)
    }
}

/// Configuration for running one extraction tool
///
/// Immutable input to a single orchestration run, owned by the caller.
/// `custom_prompt` is only meaningful for the generic `custom_prompt`
/// tool, which interpolates the user-supplied instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Identity of this configuration (keys the outcome map)
    pub id: ColumnId,
    /// Name of the tool to run (resolved through the catalog)
    pub tool_name: String,
    /// User-supplied instruction for the `custom_prompt` tool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
}

impl ToolConfig {
    /// Create a configuration for a built-in tool
    pub fn new(id: impl Into<ColumnId>, tool_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tool_name: tool_name.into(),
            custom_prompt: None,
        }
    }

    /// Attach a user-supplied instruction (for the `custom_prompt` tool)
    pub fn with_custom_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.custom_prompt = Some(prompt.into());
        self
    }
}
