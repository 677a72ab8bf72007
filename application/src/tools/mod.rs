//! Extraction tools: prompt templates plus response-parsing policies.
//!
//! Each tool is a named unit of work that formats a prompt from a bounded
//! excerpt of the document, invokes the completion provider, and shapes
//! the response into a [`ToolValue`]. Tools are grouped by catalog
//! category; the registry maps names to constructors.
//!
//! # Parsing policy
//!
//! Tools that ask the model for JSON parse the response through
//! `parse_structured` and fall back to a typed default on parse failure —
//! a malformed model response degrades one cell, never the run. Provider
//! failures (network, auth, non-2xx) always propagate to the
//! orchestrator, which owns retry.

pub mod basic;
pub mod custom;
pub mod experiment;
pub mod registry;
pub mod research;
pub mod structure;

use crate::ports::completion::{CompletionProvider, ProviderError};
use async_trait::async_trait;
use scholarpilot_domain::{AnalystPrompt, DocumentText, ToolValue};

/// Tool-specific parameters beyond the document itself.
///
/// Currently only the `custom_prompt` tool consumes anything here.
#[derive(Debug, Clone, Default)]
pub struct ToolParams {
    /// User-supplied instruction for the `custom_prompt` tool
    pub custom_prompt: Option<String>,
}

impl ToolParams {
    pub fn with_custom_prompt(prompt: impl Into<String>) -> Self {
        Self {
            custom_prompt: Some(prompt.into()),
        }
    }
}

/// A single extraction unit runnable against document text.
///
/// Implementations own a fixed prompt template and a stable, documented
/// excerpt limit; neither is configurable at call time.
#[async_trait]
pub trait ExtractionTool: Send + Sync {
    /// Registry name of this tool
    fn name(&self) -> &'static str;

    /// Run the tool against a document via the given provider
    async fn run(
        &self,
        provider: &dyn CompletionProvider,
        document: &DocumentText,
        params: &ToolParams,
    ) -> Result<ToolValue, ProviderError>;
}

/// Complete a prompt under the shared analyzer persona
pub(crate) async fn complete_with_persona(
    provider: &dyn CompletionProvider,
    prompt: &str,
) -> Result<String, ProviderError> {
    provider.complete(prompt, Some(AnalystPrompt::system())).await
}
