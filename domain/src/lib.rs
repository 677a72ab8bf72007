//! Domain layer for scholarpilot
//!
//! This crate contains the core business logic, entities, and value objects
//! of the analysis pipeline. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Extraction Tools
//!
//! An extraction tool is a named unit of analysis: a prompt template plus a
//! response-parsing policy, runnable against a document. Running a set of
//! tools over a collection of documents produces a per-document,
//! per-tool result matrix.
//!
//! ## Outcomes
//!
//! Every tool configuration in a run yields exactly one [`Outcome`] —
//! either `done` with a polymorphic [`ToolValue`], or `error` with a
//! message. Partial failure is normal; a batch never aborts.

pub mod analysis;
pub mod catalog;
pub mod core;
pub mod prompt;
pub mod provider;

// Re-export commonly used types
pub use analysis::{
    entities::{ColumnId, ToolConfig},
    parsing::{parse_structured, strip_code_fence},
    value_objects::{Outcome, OutcomeMap, OutcomeStatus, ToolValue},
};
pub use catalog::{
    ProjectTemplate, PromptPreset, ToolCategory, ToolInfo, project_templates, prompt_presets,
    template_by_name, tool_info, tool_info_for,
};
pub use core::{document::DocumentText, error::DomainError};
pub use prompt::AnalystPrompt;
pub use provider::{Credential, ProviderKind, UnknownProviderError};
