//! Tool catalog metadata: descriptive info, project templates, and prompt
//! presets.
//!
//! Everything here is pure configuration data used for presentation and
//! for seeding new projects — execution never consults it. The executable
//! name-to-tool registry lives in the application layer.

use serde::{Deserialize, Serialize};

/// Presentation category of an extraction tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Basic,
    Structure,
    Experiment,
    Research,
    Custom,
}

impl ToolCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ToolCategory::Basic => "basic",
            ToolCategory::Structure => "structure",
            ToolCategory::Experiment => "experiment",
            ToolCategory::Research => "research",
            ToolCategory::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Descriptive metadata for one tool (display only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolInfo {
    /// Registry name (e.g. "metadata_extractor")
    pub name: &'static str,
    /// Short display name (e.g. "Metadata")
    pub display_name: &'static str,
    pub category: ToolCategory,
    pub description: &'static str,
}

/// Named, ordered bundle of tool names used to seed a new project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTemplate {
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
}

/// Ready-made instruction for the `custom_prompt` tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptPreset {
    pub name: &'static str,
    pub prompt: &'static str,
}

/// Metadata for every built-in tool, in catalog order
pub fn tool_info() -> &'static [ToolInfo] {
    use ToolCategory::*;
    &[
        ToolInfo {
            name: "metadata_extractor",
            display_name: "Metadata",
            category: Basic,
            description: "Title, authors, year, affiliation",
        },
        ToolInfo {
            name: "summarizer",
            display_name: "Summary",
            category: Basic,
            description: "3-5 sentence summary",
        },
        ToolInfo {
            name: "one_sentence_summary",
            display_name: "One Sentence",
            category: Basic,
            description: "Single sentence summary",
        },
        ToolInfo {
            name: "contribution_extractor",
            display_name: "Contributions",
            category: Basic,
            description: "Key contributions list",
        },
        ToolInfo {
            name: "methodology_analyzer",
            display_name: "Methodology",
            category: Basic,
            description: "Method and approach analysis",
        },
        ToolInfo {
            name: "keyword_tagger",
            display_name: "Keywords",
            category: Basic,
            description: "Field, technology, keywords",
        },
        ToolInfo {
            name: "architecture_extractor",
            display_name: "Architecture",
            category: Structure,
            description: "System/model architecture",
        },
        ToolInfo {
            name: "limitation_finder",
            display_name: "Limitations",
            category: Structure,
            description: "Limitations and future work",
        },
        ToolInfo {
            name: "threat_to_validity",
            display_name: "Validity Threats",
            category: Structure,
            description: "Threats to validity (SE papers)",
        },
        ToolInfo {
            name: "baseline_extractor",
            display_name: "Baselines",
            category: Experiment,
            description: "Baseline methods/systems",
        },
        ToolInfo {
            name: "dataset_extractor",
            display_name: "Datasets",
            category: Experiment,
            description: "Dataset information",
        },
        ToolInfo {
            name: "metric_extractor",
            display_name: "Metrics",
            category: Experiment,
            description: "Evaluation metrics and results",
        },
        ToolInfo {
            name: "research_question_extractor",
            display_name: "Research Questions",
            category: Research,
            description: "RQs addressed",
        },
        ToolInfo {
            name: "related_work_summarizer",
            display_name: "Related Work",
            category: Research,
            description: "Related work summary",
        },
        ToolInfo {
            name: "citation_context",
            display_name: "Key Citations",
            category: Research,
            description: "Important citations and context",
        },
        ToolInfo {
            name: "reproducibility_checker",
            display_name: "Reproducibility",
            category: Research,
            description: "Code/data availability",
        },
        ToolInfo {
            name: "custom_prompt",
            display_name: "Custom",
            category: Custom,
            description: "User-defined prompt",
        },
    ]
}

/// Look up display metadata for one tool
pub fn tool_info_for(name: &str) -> Option<&'static ToolInfo> {
    tool_info().iter().find(|info| info.name == name)
}

/// Project templates, in presentation order
pub fn project_templates() -> &'static [ProjectTemplate] {
    &[
        ProjectTemplate {
            name: "basic",
            display_name: "Basic",
            description: "Title, Summary, Contribution, Method, Keywords",
            tools: &[
                "metadata_extractor",
                "summarizer",
                "contribution_extractor",
                "methodology_analyzer",
                "keyword_tagger",
            ],
        },
        ProjectTemplate {
            name: "experiment",
            display_name: "Experiment Comparison",
            description: "Basic + Baseline, Dataset, Metrics",
            tools: &[
                "metadata_extractor",
                "summarizer",
                "contribution_extractor",
                "methodology_analyzer",
                "keyword_tagger",
                "baseline_extractor",
                "dataset_extractor",
                "metric_extractor",
            ],
        },
        ProjectTemplate {
            name: "survey",
            display_name: "Survey Writing",
            description: "Basic + RQ, Related Work, Limitations",
            tools: &[
                "metadata_extractor",
                "summarizer",
                "contribution_extractor",
                "methodology_analyzer",
                "keyword_tagger",
                "research_question_extractor",
                "related_work_summarizer",
                "limitation_finder",
            ],
        },
        ProjectTemplate {
            name: "se",
            display_name: "SE/Systems Paper",
            description: "Basic + Architecture, Validity, Reproducibility",
            tools: &[
                "metadata_extractor",
                "summarizer",
                "contribution_extractor",
                "methodology_analyzer",
                "keyword_tagger",
                "architecture_extractor",
                "threat_to_validity",
                "reproducibility_checker",
            ],
        },
    ]
}

/// Find a project template by name
pub fn template_by_name(name: &str) -> Option<&'static ProjectTemplate> {
    project_templates().iter().find(|t| t.name == name)
}

/// Ready-made custom prompts offered to users
pub fn prompt_presets() -> &'static [PromptPreset] {
    &[
        PromptPreset {
            name: "Baseline Comparison",
            prompt: "List all baseline models or systems this paper compares against.",
        },
        PromptPreset {
            name: "Dataset Details",
            prompt: "Extract dataset names, sizes, sources, and availability.",
        },
        PromptPreset {
            name: "Evaluation Metrics",
            prompt: "List evaluation metrics used and their reported values.",
        },
        PromptPreset {
            name: "Code Representation",
            prompt: "Identify code representation techniques (AST, CFG, DFG, etc.) and how they are used.",
        },
        PromptPreset {
            name: "Research Gap",
            prompt: "Identify the research gap this paper addresses.",
        },
        PromptPreset {
            name: "Novelty Claims",
            prompt: "Extract the main novelty claims made by the authors.",
        },
        PromptPreset {
            name: "Experimental Setup",
            prompt: "Describe the experimental setup including hardware and configurations.",
        },
        PromptPreset {
            name: "Ablation Study",
            prompt: "Summarize any ablation studies and their findings.",
        },
        PromptPreset {
            name: "Use Cases",
            prompt: "Identify practical use cases or applications discussed.",
        },
        PromptPreset {
            name: "Comparison Table",
            prompt: "Create a comparison with related work in terms of features, methods, or results.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_info_covers_seventeen_tools() {
        assert_eq!(tool_info().len(), 17);
    }

    #[test]
    fn test_tool_names_are_unique() {
        let mut names: Vec<_> = tool_info().iter().map(|i| i.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), tool_info().len());
    }

    #[test]
    fn test_templates_reference_known_tools() {
        for template in project_templates() {
            for tool in template.tools {
                assert!(
                    tool_info_for(tool).is_some(),
                    "template '{}' references unknown tool '{}'",
                    template.name,
                    tool
                );
            }
        }
    }

    #[test]
    fn test_template_lookup() {
        let template = template_by_name("experiment").unwrap();
        assert_eq!(template.tools.len(), 8);
        assert!(template_by_name("nonexistent").is_none());
    }

    #[test]
    fn test_tool_info_lookup() {
        let info = tool_info_for("metric_extractor").unwrap();
        assert_eq!(info.display_name, "Metrics");
        assert_eq!(info.category, ToolCategory::Experiment);
    }

    #[test]
    fn test_prompt_presets_present() {
        assert_eq!(prompt_presets().len(), 10);
        assert!(prompt_presets().iter().all(|p| !p.prompt.is_empty()));
    }
}
