//! Basic-category tools: metadata, summaries, contributions, methodology,
//! keywords.

use super::{complete_with_persona, CompletionProvider, ExtractionTool, ToolParams};
use crate::ports::completion::ProviderError;
use async_trait::async_trait;
use scholarpilot_domain::{parse_structured, DocumentText, ToolValue};
use serde_json::json;
use tracing::debug;

/// Extracts title, authors, year, affiliation, and links
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Excerpt limit in characters
    pub const EXCERPT_CHARS: usize = 8_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Extract the following metadata from this research paper. Return as JSON only, no explanation.

Required fields:
- title: Paper title
- authors: List of author names
- year: Publication year (integer)
- affiliation: Primary institution/organization
- venue: Conference/journal name if mentioned
- github_url: GitHub repository URL if mentioned (null if not found)
- doi: DOI if mentioned (null if not found)

Paper content:
{excerpt}

Return JSON only:"#
        )
    }

    fn fallback() -> ToolValue {
        ToolValue::from_json(json!({
            "title": null,
            "authors": [],
            "year": null,
            "affiliation": null,
        }))
    }
}

#[async_trait]
impl ExtractionTool for MetadataExtractor {
    fn name(&self) -> &'static str {
        "metadata_extractor"
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

/// Generates a 3-5 sentence summary
pub struct Summarizer;

impl Summarizer {
    pub const EXCERPT_CHARS: usize = 12_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Provide a concise summary of this research paper in 3-5 sentences.
Focus on: (1) the problem addressed, (2) the proposed approach, (3) key results/contributions.

Paper content:
{excerpt}

Summary:"#
        )
    }
}

#[async_trait]
impl ExtractionTool for Summarizer {
    fn name(&self) -> &'static str {
        "summarizer"
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

/// Generates a single-sentence summary
pub struct OneSentenceSummary;

impl OneSentenceSummary {
    pub const EXCERPT_CHARS: usize = 8_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Summarize this research paper in exactly ONE sentence (max 30 words).
Capture the core contribution or finding.

Paper content:
{excerpt}

One sentence summary:"#
        )
    }
}

#[async_trait]
impl ExtractionTool for OneSentenceSummary {
    fn name(&self) -> &'static str {
        "one_sentence_summary"
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

/// Extracts key contributions as a list
pub struct ContributionExtractor;

impl ContributionExtractor {
    pub const EXCERPT_CHARS: usize = 12_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Extract the main contributions of this paper as a bullet-point list.
Return as JSON array of strings. Typically 3-5 contributions.

Paper content:
{excerpt}

Contributions (JSON array):"#
        )
    }
}

#[async_trait]
impl ExtractionTool for ContributionExtractor {
    fn name(&self) -> &'static str {
        "contribution_extractor"
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
                // Unlike the other list tools, an unparseable response is
                // still useful prose here: keep it as a one-item list.
                debug!(tool = self.name(), error = %e, "Keeping raw response as single item");
                Ok(ToolValue::List(vec![json!(response)]))
            }
        }
    }
}

/// Analyzes the methodology and approach
pub struct MethodologyAnalyzer;

impl MethodologyAnalyzer {
    pub const EXCERPT_CHARS: usize = 12_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Analyze the methodology of this research paper.
Format the output in Markdown using bold headers and bullet points.
Structure the analysis exactly as follows:

### **Framework Overview**
[Concise description of the overall approach]

### **Key Techniques**
*   **[Technique Name]**: [Brief description]
*   **[Technique Name]**: [Brief description]

### **Evaluation Setup**
[Description of datasets, metrics, or experimental setup]

Paper content:
{excerpt}"#
        )
    }
}

#[async_trait]
impl ExtractionTool for MethodologyAnalyzer {
    fn name(&self) -> &'static str {
        "methodology_analyzer"
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

/// Extracts research field, technologies, and keywords
pub struct KeywordTagger;

impl KeywordTagger {
    pub const EXCERPT_CHARS: usize = 8_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Extract the following from this research paper. Return as JSON only.

- field: List of research fields (e.g., "Machine Learning", "Software Engineering")
- technologies: List of specific technologies/frameworks used
- keywords: List of important keywords/terms

Paper content:
{excerpt}

Return JSON only:"#
        )
    }

    fn fallback() -> ToolValue {
        ToolValue::from_json(json!({
            "field": [],
            "technologies": [],
            "keywords": [],
        }))
    }
}

#[async_trait]
impl ExtractionTool for KeywordTagger {
    fn name(&self) -> &'static str {
        "keyword_tagger"
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
    use crate::tools::stub::{FailingProvider, StubProvider};

    fn doc() -> DocumentText {
        DocumentText::new("A paper about retry policies in distributed systems.")
    }

    #[tokio::test]
    async fn test_metadata_parses_fenced_json() {
        let provider =
            StubProvider::new("```json\n{\"title\": \"Retry Policies\", \"authors\": [\"A\"]}\n```");
        let value = MetadataExtractor
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map["title"], "Retry Policies");
    }

    #[tokio::test]
    async fn test_metadata_falls_back_on_garbage() {
        let provider = StubProvider::new("I could not find any metadata, sorry!");
        let value = MetadataExtractor
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        let map = value.as_map().unwrap();
        assert!(map["title"].is_null());
        assert_eq!(map["authors"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_summarizer_returns_text_verbatim() {
        let provider = StubProvider::new("This paper studies retries. It proposes backoff.");
        let value = Summarizer
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        assert_eq!(
            value.as_text(),
            Some("This paper studies retries. It proposes backoff.")
        );
    }

    #[tokio::test]
    async fn test_contributions_parse() {
        let provider = StubProvider::new("```json\n[\"Fast retries\", \"Formal proof\"]\n```");
        let value = ContributionExtractor
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        assert_eq!(value.as_list().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_contributions_keep_raw_response_on_parse_failure() {
        let provider = StubProvider::new("The main contribution is a new backoff scheme.");
        let value = ContributionExtractor
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        let items = value.as_list().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0], "The main contribution is a new backoff scheme.");
    }

    #[tokio::test]
    async fn test_keyword_tagger_fallback() {
        let provider = StubProvider::new("not json");
        let value = KeywordTagger
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map["field"], serde_json::json!([]));
        assert_eq!(map["keywords"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_provider_errors_propagate() {
        let provider = FailingProvider::new(500, "upstream exploded");
        let err = Summarizer
            .run(&provider, &doc(), &ToolParams::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Http { status: 500, .. }));
    }

    #[test]
    fn test_excerpt_limits_are_documented_constants() {
        assert_eq!(MetadataExtractor::EXCERPT_CHARS, 8_000);
        assert_eq!(Summarizer::EXCERPT_CHARS, 12_000);
        assert_eq!(KeywordTagger::EXCERPT_CHARS, 8_000);
    }
}
