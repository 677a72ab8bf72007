//! Structure-category tools: architecture, limitations, validity threats.

use super::{complete_with_persona, CompletionProvider, ExtractionTool, ToolParams};
use crate::ports::completion::ProviderError;
use async_trait::async_trait;
use scholarpilot_domain::{parse_structured, DocumentText, ToolValue};
use serde_json::json;
use tracing::debug;

/// Extracts system/model architecture details
pub struct ArchitectureExtractor;

impl ArchitectureExtractor {
    pub const EXCERPT_CHARS: usize = 12_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Describe the system or model architecture presented in this paper.
Include:
1. Main components
2. How components interact
3. Data flow
4. Key design decisions

If no clear architecture is presented, state that.

Paper content:
{excerpt}

Architecture description:"#
        )
    }
}

#[async_trait]
impl ExtractionTool for ArchitectureExtractor {
    fn name(&self) -> &'static str {
        "architecture_extractor"
    }

    async fn run(
        &self,
        provider: &dyn CompletionProvider,
        document: &DocumentText,
        _params: &ToolParams,
    ) -> Result<ToolValue, ProviderError> {
        let prompt = Self::prompt(document.excerpt(Self::EXCERPT_CHARS));
        let response = complete_with_persona(provider, &prompt).await?;
        Ok(ToolValue::Text(response))
    }
}

/// Finds limitations and future work
pub struct LimitationFinder;

impl LimitationFinder {
    pub const EXCERPT_CHARS: usize = 12_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Extract the limitations and future work mentioned in this paper.
Return as JSON with two arrays: "limitations" and "future_work"

Paper content:
{excerpt}

Return JSON only:"#
        )
    }

    fn fallback() -> ToolValue {
        ToolValue::from_json(json!({
            "limitations": [],
            "future_work": [],
        }))
    }
}

#[async_trait]
impl ExtractionTool for LimitationFinder {
    fn name(&self) -> &'static str {
        "limitation_finder"
    }

    async fn run(
        &self,
        provider: &dyn CompletionProvider,
        document: &DocumentText,
        _params: &ToolParams,
    ) -> Result<ToolValue, ProviderError> {
        let prompt = Self::prompt(document.excerpt(Self::EXCERPT_CHARS));
        let response = complete_with_persona(provider, &prompt).await?;

        match parse_structured(&response) {
            Ok(value) => Ok(ToolValue::from_json(value)),
            Err(e) => {
                debug!(tool = self.name(), error = %e, "Falling back to typed default");
                Ok(Self::fallback())
            }
        }
    }
}

/// Extracts threats to validity (for SE papers)
pub struct ThreatToValidity;

impl ThreatToValidity {
    pub const EXCERPT_CHARS: usize = 12_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Extract threats to validity discussed in this paper.
Categorize into: internal_validity, external_validity, construct_validity, conclusion_validity
Return as JSON with these four keys, each containing a list of threats.

If a category is not discussed, return empty list for that category.

Paper content:
{excerpt}

Return JSON only:"#
        )
    }

    fn fallback() -> ToolValue {
        ToolValue::from_json(json!({
            "internal_validity": [],
            "external_validity": [],
            "construct_validity": [],
            "conclusion_validity": [],
        }))
    }
}

#[async_trait]
impl ExtractionTool for ThreatToValidity {
    fn name(&self) -> &'static str {
        "threat_to_validity"
    }

    async fn run(
        &self,
        provider: &dyn CompletionProvider,
        document: &DocumentText,
        _params: &ToolParams,
    ) -> Result<ToolValue, ProviderError> {
        let prompt = Self::prompt(document.excerpt(Self::EXCERPT_CHARS));
        let response = complete_with_persona(provider, &prompt).await?;

        match parse_structured(&response) {
            Ok(value) => Ok(ToolValue::from_json(value)),
            Err(e) => {
                debug!(tool = self.name(), error = %e, "Falling back to typed default");
                Ok(Self::fallback())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::stub::StubProvider;

    fn doc() -> DocumentText {
        DocumentText::new("An empirical study of flaky tests.")
    }

    #[tokio::test]
    async fn test_limitations_parse() {
        let provider = StubProvider::new(
            "```json\n{\"limitations\": [\"small sample\"], \"future_work\": [\"more repos\"]}\n```",
        );
        let value = LimitationFinder
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map["limitations"], serde_json::json!(["small sample"]));
    }

    #[tokio::test]
    async fn test_threats_fallback_has_all_four_categories() {
        let provider = StubProvider::new("no threats discussed");
        let value = ThreatToValidity
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        let map = value.as_map().unwrap();
        for key in [
            "internal_validity",
            "external_validity",
            "construct_validity",
            "conclusion_validity",
        ] {
            assert_eq!(map[key], serde_json::json!([]), "missing category {key}");
        }
    }

    #[tokio::test]
    async fn test_architecture_is_verbatim_text() {
        let provider = StubProvider::new("Three components: parser, planner, executor.");
        let value = ArchitectureExtractor
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        assert!(value.as_text().unwrap().starts_with("Three components"));
    }
}
