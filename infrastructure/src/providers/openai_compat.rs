//! Chat-completions adapter for OpenAI-compatible vendors
//!
//! OpenAI, xAI Grok, and Upstage Solar speak the same chat-completions
//! wire shape; they differ only in endpoint, model id, and whether a
//! max-token limit is sent. One adapter holds those as data.

use super::{status_error, transport_error};
use async_trait::async_trait;
use scholarpilot_application::{CompletionProvider, ProviderError};
use serde_json::{json, Value};
use tracing::debug;

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const GROK_URL: &str = "https://api.x.ai/v1/chat/completions";
const SOLAR_URL: &str = "https://api.upstage.ai/v1/chat/completions";

/// Completion provider for chat-completions style APIs
pub struct ChatCompletionsProvider {
    client: reqwest::Client,
    endpoint: &'static str,
    api_key: String,
    model: String,
    max_tokens: Option<u32>,
    vendor: &'static str,
}

impl ChatCompletionsProvider {
    /// OpenAI (gpt-4o)
    pub fn openai(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: OPENAI_URL,
            api_key: api_key.into(),
            model: "gpt-4o".to_string(),
            max_tokens: Some(4096),
            vendor: "openai",
        }
    }

    /// xAI Grok (grok-beta); the API applies its own token limit
    pub fn grok(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: GROK_URL,
            api_key: api_key.into(),
            model: "grok-beta".to_string(),
            max_tokens: None,
            vendor: "grok",
        }
    }

    /// Upstage Solar (solar-pro)
    pub fn solar(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: SOLAR_URL,
            api_key: api_key.into(),
            model: "solar-pro".to_string(),
            max_tokens: Some(4096),
            vendor: "solar",
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Build the chat-completions request body
    fn build_request(
        model: &str,
        max_tokens: Option<u32>,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Value {
        let mut messages = Vec::new();
        if let Some(system) = system_prompt {
            messages.push(json!({"role": "system", "content": system}));
        }
        messages.push(json!({"role": "user", "content": prompt}));

        let mut body = json!({
            "model": model,
            "messages": messages,
        });
        if let Some(max_tokens) = max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        body
    }

    /// Extract the completion text from a chat-completions response body
    fn extract_text(body: &Value) -> Result<String, ProviderError> {
        body.pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ProviderError::MalformedResponse(
                    "missing choices[0].message.content in response".to_string(),
                )
            })
    }
}

#[async_trait]
impl CompletionProvider for ChatCompletionsProvider {
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, ProviderError> {
        if prompt.trim().is_empty() {
            return Err(ProviderError::EmptyPrompt);
        }

        debug!(vendor = self.vendor, model = %self.model, "Sending chat completion request");

        let response = self
            .client
            .post(self.endpoint)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&Self::build_request(
                &self.model,
                self.max_tokens,
                prompt,
                system_prompt,
            ))
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
    fn test_build_request_with_system() {
        let body =
            ChatCompletionsProvider::build_request("gpt-4o", Some(4096), "Summarize.", Some("Sys"));
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["max_tokens"], 4096);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
    }

    #[test]
    fn test_build_request_without_system_or_limit() {
        let body = ChatCompletionsProvider::build_request("grok-beta", None, "Summarize.", None);
        assert_eq!(body["messages"][0]["role"], "user");
        assert!(body.get("max_tokens").is_none());
    }

    #[test]
    fn test_extract_text() {
        let body = json!({"choices": [{"message": {"role": "assistant", "content": "Done."}}]});
        assert_eq!(
            ChatCompletionsProvider::extract_text(&body).unwrap(),
            "Done."
        );
    }

    #[test]
    fn test_extract_text_empty_choices() {
        let body = json!({"choices": []});
        assert!(matches!(
            ChatCompletionsProvider::extract_text(&body),
            Err(ProviderError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_vendor_defaults() {
        let client = reqwest::Client::new();
        let openai = ChatCompletionsProvider::openai(client.clone(), "k");
        assert_eq!(openai.model, "gpt-4o");
        assert_eq!(openai.endpoint, OPENAI_URL);

        let grok = ChatCompletionsProvider::grok(client.clone(), "k");
        assert_eq!(grok.model, "grok-beta");
        assert!(grok.max_tokens.is_none());

        let solar = ChatCompletionsProvider::solar(client, "k");
        assert_eq!(solar.model, "solar-pro");
        assert_eq!(solar.endpoint, SOLAR_URL);
    }
}
