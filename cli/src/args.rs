//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for analysis results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output per tool
    Full,
    /// JSON map of tool id to outcome
    Json,
}

/// CLI arguments for scholarpilot
#[derive(Parser, Debug)]
#[command(name = "scholarpilot")]
#[command(author, version, about = "Run LLM extraction tools over a research paper")]
#[command(long_about = r#"
ScholarPilot runs a set of extraction tools over a paper's text. Each tool
sends one prompt to the configured completion provider and parses the reply
into a structured value; failed tools never abort the run.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./scholarpilot.toml (or ./.scholarpilot.toml)   Project-level config
3. ~/.config/scholarpilot/config.toml              Global config

Example:
  scholarpilot paper.txt -t summary -t keywords
  scholarpilot paper.txt --template experiment --provider gemini
  scholarpilot paper.txt -t custom_prompt --custom-prompt "List every dataset"
  cat paper.txt | scholarpilot - --template basic
"#)]
pub struct Cli {
    /// Paper text file to analyze ("-" reads stdin)
    pub document: Option<PathBuf>,

    /// Tools to run, in order (can be specified multiple times)
    #[arg(short, long, value_name = "TOOL")]
    pub tool: Vec<String>,

    /// Run a named tool bundle instead of individual tools
    #[arg(long, value_name = "NAME")]
    pub template: Option<String>,

    /// Instruction for the custom_prompt tool
    #[arg(long, value_name = "TEXT")]
    pub custom_prompt: Option<String>,

    /// Completion provider (claude, openai, gemini, grok, solar)
    #[arg(short, long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Model id override for the selected provider
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// List available tools and exit
    #[arg(long)]
    pub list_tools: bool,

    /// List tool bundles and prompt presets and exit
    #[arg(long)]
    pub list_templates: bool,

    /// Check provider connectivity and exit
    #[arg(long)]
    pub verify: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress per-tool progress lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
