//! Shared prompt fragments for the analysis flow

/// Prompts common to every extraction tool
pub struct AnalystPrompt;

impl AnalystPrompt {
    /// Default system persona used when a tool (or caller) supplies none
    pub fn system() -> &'static str {
        "You are a research paper analyzer. Provide accurate, concise analysis \
         based on the paper content."
    }

    /// Trivial probe used by provider connectivity checks
    pub fn connectivity_probe() -> &'static str {
        "Say 'OK' if you can read this."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_persona_is_non_empty() {
        assert!(!AnalystPrompt::system().is_empty());
    }
}
