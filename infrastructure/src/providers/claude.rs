//! Anthropic Claude adapter (Messages API)

use super::{status_error, transport_error};
use async_trait::async_trait;
use scholarpilot_application::{CompletionProvider, ProviderError};
use scholarpilot_domain::AnalystPrompt;
use serde_json::{json, Value};
use tracing::debug;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20240620";
const MAX_TOKENS: u32 = 4096;

/// Completion provider backed by the Anthropic Messages API
pub struct ClaudeProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl ClaudeProvider {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Build the Messages API request body
    fn build_request(model: &str, prompt: &str, system_prompt: Option<&str>) -> Value {
        json!({
            "model": model,
            "max_tokens": MAX_TOKENS,
            "system": system_prompt.unwrap_or_else(|| AnalystPrompt::system()),
            "messages": [{"role": "user", "content": prompt}],
        })
    }

    /// Extract the completion text from a Messages API response body
    fn extract_text(body: &Value) -> Result<String, ProviderError> {
        body.pointer("/content/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ProviderError::MalformedResponse(
                    "missing content[0].text in Anthropic response".to_string(),
                )
            })
    }
}

#[async_trait]
impl CompletionProvider for ClaudeProvider {
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, ProviderError> {
        if prompt.trim().is_empty() {
            return Err(ProviderError::EmptyPrompt);
        }

        debug!(model = %self.model, "Sending completion request to Anthropic");

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&Self::build_request(&self.model, prompt, system_prompt))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        Self::extract_text(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_shape() {
        let body = ClaudeProvider::build_request("claude-x", "What is this paper about?", None);
        assert_eq!(body["model"], "claude-x");
        assert_eq!(body["max_tokens"], 4096);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "What is this paper about?");
        // Absent system prompt falls back to the analyzer persona
        assert_eq!(body["system"], AnalystPrompt::system());
    }

    #[test]
    fn test_build_request_explicit_system() {
        let body = ClaudeProvider::build_request("claude-x", "hi", Some("Test"));
        assert_eq!(body["system"], "Test");
    }

    #[test]
    fn test_extract_text() {
        let body = json!({"content": [{"type": "text", "text": "A summary."}]});
        assert_eq!(ClaudeProvider::extract_text(&body).unwrap(), "A summary.");
    }

    #[test]
    fn test_extract_text_malformed_envelope() {
        let body = json!({"error": {"type": "overloaded_error"}});
        assert!(matches!(
            ClaudeProvider::extract_text(&body),
            Err(ProviderError::MalformedResponse(_))
        ));
    }
}
