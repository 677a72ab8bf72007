//! CLI entrypoint for ScholarPilot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod args;
mod output;

use anyhow::{bail, Context, Result};
use args::{Cli, OutputFormat};
use clap::Parser;
use colored::Colorize;
use output::ConsoleFormatter;
use scholarpilot_application::{AnalyzeDocumentUseCase, ToolCatalog};
use scholarpilot_domain::{
    project_templates, prompt_presets, tool_info, DocumentText, DomainError, ToolConfig,
};
use scholarpilot_infrastructure::{build_provider_with_model, SettingsLoader};
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.list_tools {
        print_tools();
        return Ok(());
    }

    if cli.list_templates {
        print_templates();
        return Ok(());
    }

    if cli.show_config {
        print_config_locations();
        return Ok(());
    }

    // Load settings, then let flags override the files
    let mut settings = if cli.no_config {
        SettingsLoader::load_defaults()
    } else {
        SettingsLoader::load(cli.config.as_ref())?
    };
    if let Some(provider) = &cli.provider {
        settings.provider = provider.clone();
    }
    if let Some(model) = &cli.model {
        settings.model = Some(model.clone());
    }

    let credential = settings.credential()?;
    let provider = build_provider_with_model(&credential, settings.model.as_deref());

    if cli.verify {
        info!(provider = %credential.provider, "Verifying provider connectivity");
        if provider.verify().await {
            println!("{} {} is reachable", "ok:".green().bold(), credential.provider);
            return Ok(());
        }
        bail!("provider {} is not reachable (check the API key)", credential.provider);
    }

    // Read the paper text
    let Some(document_path) = &cli.document else {
        bail!("A paper text file is required (\"-\" reads stdin). See --help.");
    };
    let text = read_document(document_path)?;
    if text.trim().is_empty() {
        return Err(DomainError::EmptyDocument.into());
    }
    let document = DocumentText::new(text);

    // Build the run's tool configurations
    let configs = build_configs(&cli)?;

    if !cli.quiet {
        println!(
            "Analyzing with {} tool(s) via {}...",
            configs.len(),
            credential.provider
        );
    }

    // === Dependency Injection ===
    let catalog = Arc::new(ToolCatalog::builtin());
    let use_case = AnalyzeDocumentUseCase::new(provider, catalog);

    let outcomes = use_case.execute(&document, &configs).await;

    let rendered = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&outcomes),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcomes),
    };
    println!("{}", rendered);

    if outcomes.error_count() > 0 && outcomes.done_count() == 0 {
        bail!("every tool failed");
    }
    Ok(())
}

/// Read the paper text from a file, or stdin when the path is "-"
fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read paper text from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read paper text from {}", path.display()))
    }
}

/// Turn flags into ordered tool configurations.
///
/// A template expands to its tool list; explicit -t tools run after it.
/// Duplicate tool names get a numeric suffix so no outcome is overwritten.
fn build_configs(cli: &Cli) -> Result<Vec<ToolConfig>> {
    let mut names: Vec<String> = Vec::new();

    if let Some(template_name) = &cli.template {
        let Some(template) = scholarpilot_domain::template_by_name(template_name) else {
            bail!(
                "Unknown template: {} (try --list-templates)",
                template_name
            );
        };
        names.extend(template.tools.iter().map(|t| t.to_string()));
    }
    names.extend(cli.tool.iter().cloned());

    if names.is_empty() {
        return Err(DomainError::NoToolConfigs)
            .context("select tools with -t <tool> or --template <name> (try --list-tools)");
    }

    let mut configs = Vec::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        let id = if names[..i].contains(name) {
            format!("{}-{}", name, names[..i].iter().filter(|n| *n == name).count() + 1)
        } else {
            name.clone()
        };
        let mut config = ToolConfig::new(id, name.clone());
        if name == "custom_prompt" {
            if let Some(prompt) = &cli.custom_prompt {
                config = config.with_custom_prompt(prompt.clone());
            }
        }
        configs.push(config);
    }
    Ok(configs)
}

fn print_tools() {
    println!("{}", "Available tools:".cyan().bold());
    for info in tool_info() {
        println!(
            "  {:<30} [{}] {}",
            info.name.bold(),
            info.category,
            info.description
        );
    }
}

fn print_templates() {
    println!("{}", "Templates:".cyan().bold());
    for template in project_templates() {
        println!(
            "  {:<12} {} ({})",
            template.name.bold(),
            template.description,
            template.tools.join(", ")
        );
    }
    println!();
    println!("{}", "Custom prompt presets:".cyan().bold());
    for preset in prompt_presets() {
        println!("  {:<24} {}", preset.name.bold(), preset.prompt);
    }
}

fn print_config_locations() {
    println!("{}", "Configuration file locations (highest priority first):".cyan().bold());
    println!("  1. --config <path>");
    println!("  2. ./scholarpilot.toml or ./.scholarpilot.toml");
    match SettingsLoader::global_config_path() {
        Some(path) => println!("  3. {}", path.display()),
        None => println!("  3. (no platform config directory)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_template_expands_before_explicit_tools() {
        let cli = parse(&["scholarpilot", "p.txt", "--template", "basic", "-t", "metric_extractor"]);
        let configs = build_configs(&cli).unwrap();
        assert_eq!(configs.len(), 6);
        assert_eq!(configs[0].tool_name, "metadata_extractor");
        assert_eq!(configs[5].tool_name, "metric_extractor");
    }

    #[test]
    fn test_duplicate_tools_get_distinct_ids() {
        let cli = parse(&["scholarpilot", "p.txt", "-t", "summarizer", "-t", "summarizer"]);
        let configs = build_configs(&cli).unwrap();
        assert_eq!(configs[0].id.as_str(), "summarizer");
        assert_eq!(configs[1].id.as_str(), "summarizer-2");
    }

    #[test]
    fn test_custom_prompt_attached_to_custom_tool_only() {
        let cli = parse(&[
            "scholarpilot", "p.txt",
            "-t", "summarizer",
            "-t", "custom_prompt",
            "--custom-prompt", "List every dataset",
        ]);
        let configs = build_configs(&cli).unwrap();
        assert!(configs[0].custom_prompt.is_none());
        assert_eq!(configs[1].custom_prompt.as_deref(), Some("List every dataset"));
    }

    #[test]
    fn test_no_tools_is_an_error() {
        let cli = parse(&["scholarpilot", "p.txt"]);
        assert!(build_configs(&cli).is_err());
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let cli = parse(&["scholarpilot", "p.txt", "--template", "nope"]);
        assert!(build_configs(&cli).is_err());
    }
}
