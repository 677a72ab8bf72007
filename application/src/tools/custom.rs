//! The generic user-defined prompt tool.

use super::{complete_with_persona, CompletionProvider, ExtractionTool, ToolParams};
use crate::ports::completion::ProviderError;
use async_trait::async_trait;
use scholarpilot_domain::{DocumentText, ToolValue};
use tracing::debug;

/// Executes a user-supplied instruction against the document.
///
/// The instruction comes from the tool configuration's `custom_prompt`
/// field. A missing or blank instruction short-circuits: the tool returns
/// [`CustomPrompt::MISSING_PROMPT_VALUE`] as its value without calling the
/// provider, matching how an empty cell is presented rather than failing
/// the whole row.
pub struct CustomPrompt;

impl CustomPrompt {
    pub const EXCERPT_CHARS: usize = 12_000;

    /// Fixed value returned when no instruction was supplied
    pub const MISSING_PROMPT_VALUE: &'static str = "Error: No custom prompt provided";

    fn prompt(instruction: &str, excerpt: &str) -> String {
        format!(
            r#"{instruction}

Paper content:
{excerpt}

Result:"#
        )
    }
}

#[async_trait]
impl ExtractionTool for CustomPrompt {
    fn name(&self) -> &'static str {
        "custom_prompt"
    }

    async fn run(
        &self,
        provider: &dyn CompletionProvider,
        document: &DocumentText,
        params: &ToolParams,
    ) -> Result<ToolValue, ProviderError> {
        let instruction = params.custom_prompt.as_deref().unwrap_or("").trim();
        if instruction.is_empty() {
            debug!("custom_prompt invoked without an instruction");
            return Ok(ToolValue::text(Self::MISSING_PROMPT_VALUE));
        }

        let prompt = Self::prompt(instruction, document.excerpt(Self::EXCERPT_CHARS));
        let response = complete_with_persona(provider, &prompt).await?;
        Ok(ToolValue::Text(response))
    }
}
