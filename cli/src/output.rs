//! Console output formatting for analysis results

use colored::Colorize;
use scholarpilot_domain::{OutcomeMap, OutcomeStatus, ToolValue};

/// Formats an outcome map for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format every outcome, in run order, with a summary footer
    pub fn format(outcomes: &OutcomeMap) -> String {
        let mut output = String::new();

        for (id, outcome) in outcomes.iter() {
            match outcome.status {
                OutcomeStatus::Done => {
                    output.push_str(&format!("\n{}\n", format!("── {} ──", id).green().bold()));
                    if let Some(value) = &outcome.value {
                        output.push_str(&Self::format_value(value));
                        output.push('\n');
                    }
                }
                OutcomeStatus::Error => {
                    output.push_str(&format!("\n{}\n", format!("── {} ──", id).red().bold()));
                    output.push_str(&format!(
                        "{} {}\n",
                        "Error:".red(),
                        outcome.error_message.as_deref().unwrap_or("Unknown")
                    ));
                }
            }
        }

        output.push_str(&format!(
            "\n{} {} done, {} failed\n",
            "Summary:".cyan().bold(),
            outcomes.done_count(),
            outcomes.error_count()
        ));

        output
    }

    /// Format as a JSON map of tool id to outcome
    pub fn format_json(outcomes: &OutcomeMap) -> String {
        serde_json::to_string_pretty(outcomes).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_value(value: &ToolValue) -> String {
        match value {
            ToolValue::Text(text) => text.clone(),
            other => serde_json::to_value(other)
                .ok()
                .and_then(|v| serde_json::to_string_pretty(&v).ok())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholarpilot_domain::{ColumnId, Outcome};

    fn sample() -> OutcomeMap {
        let mut outcomes = OutcomeMap::new();
        outcomes.insert(
            ColumnId::new("summary"),
            Outcome::done(ToolValue::text("A paper about parsers.")),
        );
        outcomes.insert(
            ColumnId::new("metrics"),
            Outcome::error("HTTP 500: upstream"),
        );
        outcomes
    }

    #[test]
    fn test_format_lists_every_outcome() {
        colored::control::set_override(false);
        let rendered = ConsoleFormatter::format(&sample());
        assert!(rendered.contains("── summary ──"));
        assert!(rendered.contains("A paper about parsers."));
        assert!(rendered.contains("── metrics ──"));
        assert!(rendered.contains("HTTP 500: upstream"));
        assert!(rendered.contains("1 done, 1 failed"));
    }

    #[test]
    fn test_format_json_round_trips() {
        let rendered = ConsoleFormatter::format_json(&sample());
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed["summary"]["status"], "done");
        assert_eq!(parsed["metrics"]["status"], "error");
    }
}
