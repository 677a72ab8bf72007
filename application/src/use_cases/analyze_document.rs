//! Analyze Document use case
//!
//! Orchestrates one analysis run: for each tool configuration, resolve
//! the tool through the catalog and run it with bounded retry, isolating
//! per-configuration failure. This use case is the failure boundary of
//! the core — no tool or provider error escapes it; every configuration
//! yields exactly one [`Outcome`].
//!
//! Configurations are processed sequentially: each tool call suspends on
//! the network, and a sequential loop keeps retry bookkeeping simple
//! while avoiding request bursts against a single provider. Callers that
//! want cross-document concurrency run one use case per document.

use crate::ports::completion::CompletionProvider;
use crate::retry::{retry_with_backoff, RetryPolicy};
use crate::tools::{registry::ToolCatalog, ToolParams};
use scholarpilot_domain::{DocumentText, DomainError, Outcome, OutcomeMap, ToolConfig};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for running a set of extraction tools over one document
pub struct AnalyzeDocumentUseCase<P: CompletionProvider + ?Sized + 'static> {
    provider: Arc<P>,
    catalog: Arc<ToolCatalog>,
    retry: RetryPolicy,
}

impl<P: CompletionProvider + ?Sized + 'static> AnalyzeDocumentUseCase<P> {
    /// Create a use case with the default retry policy (3 attempts,
    /// exponential backoff from 2s capped at 10s)
    pub fn new(provider: Arc<P>, catalog: Arc<ToolCatalog>) -> Self {
        Self {
            provider,
            catalog,
            retry: RetryPolicy::default(),
        }
    }

    /// Override the retry policy (mainly for tests and batch tuning)
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Run every configuration against the document.
    ///
    /// Returns one outcome per input configuration, in input order.
    /// Individual failures never abort the remaining configurations.
    pub async fn execute(&self, document: &DocumentText, configs: &[ToolConfig]) -> OutcomeMap {
        info!(tools = configs.len(), "Starting analysis run");

        let mut outcomes = OutcomeMap::with_capacity(configs.len());
        for config in configs {
            let outcome = self.execute_one(document, config).await;
            outcomes.insert(config.id.clone(), outcome);
        }

        info!(
            done = outcomes.done_count(),
            errors = outcomes.error_count(),
            "Analysis run finished"
        );
        outcomes
    }

    /// Run a single configuration (retry-of-one scenarios).
    pub async fn execute_one(&self, document: &DocumentText, config: &ToolConfig) -> Outcome {
        let Some(tool) = self.catalog.resolve(&config.tool_name) else {
            // Static configuration mismatch, not transient: no retry,
            // no provider call.
            warn!(tool = %config.tool_name, column = %config.id, "Unknown tool");
            return Outcome::error(DomainError::UnknownTool(config.tool_name.clone()).to_string());
        };

        debug!(tool = %config.tool_name, column = %config.id, "Running tool");

        let params = ToolParams {
            custom_prompt: config.custom_prompt.clone(),
        };

        let provider_ref = self.provider.as_ref();
        let provider: &dyn CompletionProvider = &provider_ref;
        let result = retry_with_backoff(self.retry, |_| true, || {
            tool.run(provider, document, &params)
        })
        .await;

        match result {
            Ok(value) => Outcome::done(value),
            Err(e) => {
                warn!(tool = %config.tool_name, column = %config.id, error = %e, "Tool failed after retries");
                Outcome::error(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion::ProviderError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Provider that replays a fixed script of results, then repeats the
    /// last entry
    struct ScriptedProvider {
        script: Mutex<VecDeque<Result<String, ProviderError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(script: Vec<Result<String, ProviderError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn always(response: &str) -> Self {
            Self::new(vec![Ok(response.to_string())])
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionProvider for ScriptedProvider {
        async fn complete(
            &self,
            _prompt: &str,
            _system_prompt: Option<&str>,
        ) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut script = self.script.lock().unwrap();
            if script.len() > 1 {
                script.pop_front().unwrap()
            } else {
                script.front().cloned().unwrap_or_else(|| {
                    Err(ProviderError::Network("script exhausted".to_string()))
                })
            }
        }
    }

    fn use_case(provider: Arc<ScriptedProvider>) -> AnalyzeDocumentUseCase<ScriptedProvider> {
        AnalyzeDocumentUseCase::new(provider, Arc::new(ToolCatalog::builtin()))
    }

    fn doc() -> DocumentText {
        DocumentText::new("A study of build reproducibility across 10k crates.")
    }

    fn network_err(n: u32) -> Result<String, ProviderError> {
        Err(ProviderError::Network(format!("connection reset {n}")))
    }

    #[tokio::test]
    async fn test_one_outcome_per_config_in_input_order() {
        let provider = Arc::new(ScriptedProvider::always("plain text answer"));
        let configs = vec![
            ToolConfig::new("c3", "summarizer"),
            ToolConfig::new("c1", "no_such_tool"),
            ToolConfig::new("c2", "one_sentence_summary"),
        ];

        let outcomes = use_case(provider).execute(&doc(), &configs).await;

        assert_eq!(outcomes.len(), 3);
        let ids: Vec<&str> = outcomes.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["c3", "c1", "c2"]);
        assert!(outcomes.get(&"c3".into()).unwrap().is_done());
        assert!(!outcomes.get(&"c1".into()).unwrap().is_done());
        assert!(outcomes.get(&"c2".into()).unwrap().is_done());
    }

    #[tokio::test]
    async fn test_unknown_tool_makes_zero_provider_calls() {
        let provider = Arc::new(ScriptedProvider::always("unused"));
        let configs = vec![ToolConfig::new("c1", "frobnicator")];

        let outcomes = use_case(Arc::clone(&provider)).execute(&doc(), &configs).await;

        let outcome = outcomes.get(&"c1".into()).unwrap();
        assert_eq!(
            outcome.error_message.as_deref(),
            Some("Unknown tool: frobnicator")
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_succeeds_on_third_attempt() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            network_err(1),
            network_err(2),
            Ok("recovered summary".to_string()),
        ]));
        let configs = vec![ToolConfig::new("c1", "summarizer")];

        let outcomes = use_case(Arc::clone(&provider)).execute(&doc(), &configs).await;

        let outcome = outcomes.get(&"c1".into()).unwrap();
        assert!(outcome.is_done());
        assert_eq!(
            outcome.value.as_ref().unwrap().as_text(),
            Some("recovered summary")
        );
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retry_exhaustion_surfaces_last_error_no_fourth_attempt() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            network_err(1),
            network_err(2),
            network_err(3),
            Ok("too late".to_string()),
        ]));
        let configs = vec![ToolConfig::new("c1", "summarizer")];

        let outcomes = use_case(Arc::clone(&provider)).execute(&doc(), &configs).await;

        let outcome = outcomes.get(&"c1".into()).unwrap();
        assert!(!outcome.is_done());
        assert_eq!(
            outcome.error_message.as_deref(),
            Some("Network error: connection reset 3")
        );
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_are_isolated_per_config() {
        // First config burns three failing attempts; the rest of the
        // script answers the second config.
        let provider = Arc::new(ScriptedProvider::new(vec![
            network_err(1),
            network_err(2),
            network_err(3),
            Ok("second tool answer".to_string()),
        ]));
        let configs = vec![
            ToolConfig::new("c1", "summarizer"),
            ToolConfig::new("c2", "one_sentence_summary"),
        ];

        let outcomes = use_case(provider).execute(&doc(), &configs).await;

        assert!(!outcomes.get(&"c1".into()).unwrap().is_done());
        assert!(outcomes.get(&"c2".into()).unwrap().is_done());
    }

    #[tokio::test]
    async fn test_custom_prompt_config_flows_through() {
        let provider = Arc::new(ScriptedProvider::always("The gap is X."));
        let configs = vec![
            ToolConfig::new("c1", "custom_prompt").with_custom_prompt("Identify the gap."),
        ];

        let outcomes = use_case(provider).execute(&doc(), &configs).await;

        assert_eq!(
            outcomes
                .get(&"c1".into())
                .unwrap()
                .value
                .as_ref()
                .unwrap()
                .as_text(),
            Some("The gap is X.")
        );
    }

    #[tokio::test]
    async fn test_missing_custom_prompt_is_done_without_provider_call() {
        let provider = Arc::new(ScriptedProvider::always("unused"));
        let configs = vec![ToolConfig::new("c1", "custom_prompt")];

        let outcomes = use_case(Arc::clone(&provider)).execute(&doc(), &configs).await;

        let outcome = outcomes.get(&"c1".into()).unwrap();
        assert!(outcome.is_done());
        assert_eq!(
            outcome.value.as_ref().unwrap().as_text(),
            Some("Error: No custom prompt provided")
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_same_inputs_twice_yield_identical_outcome_maps() {
        let configs = vec![
            ToolConfig::new("c1", "summarizer"),
            ToolConfig::new("c2", "baseline_extractor"),
            ToolConfig::new("c3", "no_such_tool"),
        ];

        // Fresh use case per run: no hidden state can carry over.
        let first = use_case(Arc::new(ScriptedProvider::always("[\"B1\"]")))
            .execute(&doc(), &configs)
            .await;
        let second = use_case(Arc::new(ScriptedProvider::always("[\"B1\"]")))
            .execute(&doc(), &configs)
            .await;

        assert_eq!(first, second);
    }
}
