//! Google Gemini adapter (generateContent API)

use super::{status_error, transport_error};
use async_trait::async_trait;
use scholarpilot_application::{CompletionProvider, ProviderError};
use serde_json::{json, Value};
use tracing::debug;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Completion provider backed by the Gemini generateContent API
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
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

    fn endpoint(&self) -> String {
        format!("{BASE_URL}/{}:generateContent", self.model)
    }

    /// Build the generateContent request body.
    ///
    /// The REST API has no top-level system field in this shape; a system
    /// instruction is prepended to the user prompt instead.
    fn build_request(prompt: &str, system_prompt: Option<&str>) -> Value {
        let full_prompt = match system_prompt {
            Some(system) => format!("{system}\n\n{prompt}"),
            None => prompt.to_string(),
        };
        json!({
            "contents": [{"parts": [{"text": full_prompt}]}],
        })
    }

    /// Extract the completion text from a generateContent response body
    fn extract_text(body: &Value) -> Result<String, ProviderError> {
        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                ProviderError::MalformedResponse(
                    "missing candidates[0].content.parts[0].text in Gemini response".to_string(),
                )
            })
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, ProviderError> {
        if prompt.trim().is_empty() {
            return Err(ProviderError::EmptyPrompt);
        }

        debug!(model = %self.model, "Sending completion request to Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::build_request(prompt, system_prompt))
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
