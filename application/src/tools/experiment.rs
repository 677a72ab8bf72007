//! Experiment-category tools: baselines, datasets, metrics.

use super::{complete_with_persona, CompletionProvider, ExtractionTool, ToolParams};
use crate::ports::completion::ProviderError;
use async_trait::async_trait;
use scholarpilot_domain::{parse_structured, DocumentText, ToolValue};
use serde_json::json;
use tracing::debug;

/// Extracts baseline methods/systems for comparison
pub struct BaselineExtractor;

impl BaselineExtractor {
    pub const EXCERPT_CHARS: usize = 12_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Extract all baseline methods, models, or systems that this paper compares against.
Return as JSON array of strings (baseline names).

Paper content:
{excerpt}

Baselines (JSON array):"#
        )
    }
}

#[async_trait]
impl ExtractionTool for BaselineExtractor {
    fn name(&self) -> &'static str {
        "baseline_extractor"
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

/// Extracts dataset information
pub struct DatasetExtractor;

impl DatasetExtractor {
    pub const EXCERPT_CHARS: usize = 12_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Extract all datasets used in this paper.
For each dataset, provide: name, size (if mentioned), source/url (if mentioned), description
Return as JSON array of objects.

Paper content:
{excerpt}

Datasets (JSON array):"#
        )
    }
}

#[async_trait]
impl ExtractionTool for DatasetExtractor {
    fn name(&self) -> &'static str {
        "dataset_extractor"
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

/// Extracts evaluation metrics and results
pub struct MetricExtractor;

impl MetricExtractor {
    /// Metrics usually live in tables deep into the paper, hence the
    /// larger excerpt than most tools.
    pub const EXCERPT_CHARS: usize = 15_000;

    fn prompt(excerpt: &str) -> String {
        format!(
            r#"Analyze the paper to extract quantitative evaluation metrics and results.
Focus on tables and the "Experiments" or "Results" sections.

Return a JSON object with strictly two keys:
1. "metrics": A list of strings, naming the metrics used (e.g. "Accuracy", "F1 Score", "BLEU").
2. "results": An object where keys are the metric names and values are the specific scores/values reported in the paper.
   - Ensure you extract the VALUES (numbers, percentages), not just the names.
   - If multiple models are compared, provide the best result or the main proposed method's result.
   - Example format: {{ "Accuracy": "94.5%", "Inference Time": "12ms" }}

Paper content:
{excerpt}

Return ONLY valid JSON:"#
        )
    }

    fn fallback() -> ToolValue {
        ToolValue::from_json(json!({
            "metrics": [],
            "results": {},
        }))
    }
}

#[async_trait]
impl ExtractionTool for MetricExtractor {
    fn name(&self) -> &'static str {
        "metric_extractor"
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
