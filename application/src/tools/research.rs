//! Research-category tools: research questions, related work, citations,
//! reproducibility.

use super::{complete_with_persona, CompletionProvider, ExtractionTool, ToolParams};
use crate::ports::completion::ProviderError;
use async_trait::async_trait;
use scholarpilot_domain::{parse_structured, DocumentText, ToolValue};
use serde_json::json;
use tracing::debug;

/// Extracts research questions
pub struct ResearchQuestionExtractor;

impl ResearchQuestionExtractor {
    pub const EXCERPT_CHARS: usize = 12_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Extract the research questions (RQs) from this paper.
Return as JSON array of strings in format "RQ1: ..."

If no explicit RQs are stated, infer the main research questions addressed.

Paper content:
{excerpt}

Research questions (JSON array):"#
        )
    }
}

#[async_trait]
impl ExtractionTool for ResearchQuestionExtractor {
    fn name(&self) -> &'static str {
        "research_question_extractor"
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
                debug!(tool = self.name(), error = %e, "Falling back to empty list");
                Ok(ToolValue::empty_list())
            }
        }
    }
}

/// Summarizes the related work section
pub struct RelatedWorkSummarizer;

impl RelatedWorkSummarizer {
    pub const EXCERPT_CHARS: usize = 12_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Summarize the related work discussed in this paper.
Format the output in Markdown using bold headers and bullet points.
Structure the summary exactly as follows:

### **Key Themes**
*   **[Theme/Category Name]**: [Brief summary of work in this area]
*   **[Theme/Category Name]**: [Brief summary of work in this area]

### **Differentiation**
[Explanation of how this paper differs from or builds upon the related work]

Paper content:
{excerpt}"#
        )
    }
}

#[async_trait]
impl ExtractionTool for RelatedWorkSummarizer {
    fn name(&self) -> &'static str {
        "related_work_summarizer"
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

/// Extracts key citations and their context
pub struct CitationContext;

impl CitationContext {
    pub const EXCERPT_CHARS: usize = 12_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Identify the most important citations in this paper (5-10 key references).
For each, provide: citation (author/title), why it's cited, relationship to this work.
Return as JSON array of objects with fields: citation, reason, relationship

Paper content:
{excerpt}

Key citations (JSON array):"#
        )
    }
}

#[async_trait]
impl ExtractionTool for CitationContext {
    fn name(&self) -> &'static str {
        "citation_context"
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
                debug!(tool = self.name(), error = %e, "Falling back to empty list");
                Ok(ToolValue::empty_list())
            }
        }
    }
}

/// Checks code/data availability and reproducibility info
pub struct ReproducibilityChecker;

impl ReproducibilityChecker {
    pub const EXCERPT_CHARS: usize = 12_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Check reproducibility information in this paper.
Return JSON with:
- code_available: boolean
- code_url: URL if available
- data_available: boolean
- data_url: URL if available
- environment_info: any mentioned environment/setup requirements
- reproducibility_notes: any other relevant info

Paper content:
{excerpt}

Return JSON only:"#
        )
    }

    fn fallback() -> ToolValue {
        ToolValue::from_json(json!({
            "code_available": false,
            "code_url": null,
            "data_available": false,
            "data_url": null,
            "environment_info": null,
            "reproducibility_notes": null,
        }))
    }
}

#[async_trait]
impl ExtractionTool for ReproducibilityChecker {
    fn name(&self) -> &'static str {
        "reproducibility_checker"
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
        DocumentText::new("RQ1: does it scale? Code at github.com/x/y.")
    }

    #[tokio::test]
    async fn test_research_questions_parse() {
        let provider = StubProvider::new("[\"RQ1: Does it scale?\"]");
        let value = ResearchQuestionExtractor
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        assert_eq!(value.as_list().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reproducibility_fallback() {
        let provider = StubProvider::new("the code is on github somewhere");
        let value = ReproducibilityChecker
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map["code_available"], serde_json::json!(false));
        assert!(map["code_url"].is_null());
    }

    #[tokio::test]
    async fn test_citation_context_unparseable_is_empty_list() {
        let provider = StubProvider::new("see references section");
        let value = CitationContext
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        assert_eq!(value, ToolValue::empty_list());
    }

    #[tokio::test]
    async fn test_related_work_is_text() {
        let provider = StubProvider::new("### **Key Themes**\n* prior art");
        let value = RelatedWorkSummarizer
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        assert!(value.as_text().unwrap().contains("Key Themes"));
    }
}
