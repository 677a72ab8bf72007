//! Tool registry
//!
//! The [`ToolCatalog`] maps tool names to constructors for the built-in
//! extraction tools. Registration happens once when the catalog is built
//! (process start, typically), never dynamically at runtime.
//!
//! An unknown name is a normal, expected condition — a column may
//! reference a removed tool — so `resolve` returns `Option` and the
//! orchestrator turns `None` into a structured error outcome rather than
//! a panic or escaping error.

use std::collections::HashMap;

use super::basic::{
    ContributionExtractor, KeywordTagger, MetadataExtractor, MethodologyAnalyzer,
    OneSentenceSummary, Summarizer,
};
use super::custom::CustomPrompt;
use super::experiment::{BaselineExtractor, DatasetExtractor, MetricExtractor};
use super::research::{
    CitationContext, RelatedWorkSummarizer, ReproducibilityChecker, ResearchQuestionExtractor,
};
use super::structure::{ArchitectureExtractor, LimitationFinder, ThreatToValidity};
use super::ExtractionTool;

type ToolCtor = fn() -> Box<dyn ExtractionTool>;

/// Static mapping from tool name to tool constructor
pub struct ToolCatalog {
    tools: HashMap<&'static str, ToolCtor>,
}

impl ToolCatalog {
    /// Build the catalog of all built-in tools
    pub fn builtin() -> Self {
        let mut tools: HashMap<&'static str, ToolCtor> = HashMap::new();
        tools.insert("metadata_extractor", || Box::new(MetadataExtractor));
        tools.insert("summarizer", || Box::new(Summarizer));
        tools.insert("one_sentence_summary", || Box::new(OneSentenceSummary));
        tools.insert("contribution_extractor", || Box::new(ContributionExtractor));
        tools.insert("methodology_analyzer", || Box::new(MethodologyAnalyzer));
        tools.insert("keyword_tagger", || Box::new(KeywordTagger));
        tools.insert("architecture_extractor", || Box::new(ArchitectureExtractor));
        tools.insert("limitation_finder", || Box::new(LimitationFinder));
        tools.insert("threat_to_validity", || Box::new(ThreatToValidity));
        tools.insert("baseline_extractor", || Box::new(BaselineExtractor));
        tools.insert("dataset_extractor", || Box::new(DatasetExtractor));
        tools.insert("metric_extractor", || Box::new(MetricExtractor));
        tools.insert("research_question_extractor", || {
            Box::new(ResearchQuestionExtractor)
        });
        tools.insert("related_work_summarizer", || Box::new(RelatedWorkSummarizer));
        tools.insert("citation_context", || Box::new(CitationContext));
        tools.insert("reproducibility_checker", || Box::new(ReproducibilityChecker));
        tools.insert("custom_prompt", || Box::new(CustomPrompt));
        Self { tools }
    }

    /// Construct the tool registered under `name`, if any
    pub fn resolve(&self, name: &str) -> Option<Box<dyn ExtractionTool>> {
        self.tools.get(name).map(|ctor| ctor())
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Names of all registered tools (unordered)
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholarpilot_domain::{project_templates, tool_info};

    #[test]
    fn test_all_builtin_tools_registered() {
        let catalog = ToolCatalog::builtin();
        assert_eq!(catalog.len(), 17);
        assert!(catalog.has_tool("summarizer"));
        assert!(catalog.has_tool("custom_prompt"));
    }

    #[test]
    fn test_unknown_tool_resolves_to_none() {
        let catalog = ToolCatalog::builtin();
        assert!(catalog.resolve("frobnicator").is_none());
    }

    #[test]
    fn test_resolved_tool_reports_its_registry_name() {
        let catalog = ToolCatalog::builtin();
        for name in catalog.tool_names() {
            let tool = catalog.resolve(name).unwrap();
            assert_eq!(tool.name(), name, "registry key and tool name diverge");
        }
    }

    #[test]
    fn test_catalog_matches_display_metadata() {
        let catalog = ToolCatalog::builtin();
        for info in tool_info() {
            assert!(
                catalog.has_tool(info.name),
                "metadata lists '{}' but the registry does not",
                info.name
            );
        }
        assert_eq!(catalog.len(), tool_info().len());
    }

    #[test]
    fn test_every_template_tool_resolves() {
        let catalog = ToolCatalog::builtin();
        for template in project_templates() {
            for name in template.tools {
                assert!(catalog.has_tool(name));
            }
        }
    }
}
