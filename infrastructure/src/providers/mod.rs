//! Completion provider adapters
//!
//! One adapter per vendor, all implementing the application's
//! [`CompletionProvider`] port. Adapters differ only in endpoint URL,
//! authentication header shape, and request/response JSON schema; the
//! OpenAI-compatible vendors (OpenAI, Grok, Solar) share a single
//! adapter parameterized by endpoint and model.
//!
//! Request building and response-text extraction are pure functions on
//! JSON values so the wire shapes are unit-testable without a network.

pub mod claude;
pub mod gemini;
pub mod openai_compat;

use crate::providers::claude::ClaudeProvider;
use crate::providers::gemini::GeminiProvider;
use crate::providers::openai_compat::ChatCompletionsProvider;
use scholarpilot_application::{CompletionProvider, ProviderError};
use scholarpilot_domain::{Credential, ProviderKind};
use std::sync::Arc;
use std::time::Duration;

/// Fixed bound on one outbound provider call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Build an HTTP client with the standard request timeout
pub(crate) fn default_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("failed to build HTTP client")
}

/// Map a transport-level reqwest failure onto the port error type
pub(crate) fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout {
            elapsed_secs: REQUEST_TIMEOUT.as_secs(),
        }
    } else {
        ProviderError::Network(e.to_string())
    }
}

/// Turn a non-2xx response into a hard failure carrying status and body.
///
/// Authentication statuses get their own variant so callers can report
/// a bad key distinctly from a flaky upstream.
pub(crate) async fn status_error(response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_default();
    match status {
        401 | 403 => ProviderError::Auth(message),
        _ => ProviderError::Http { status, message },
    }
}

/// Resolve a credential to a concrete provider instance.
///
/// Unknown provider names never reach this function: they fail earlier,
/// when parsing a [`ProviderKind`].
pub fn build_provider(credential: &Credential) -> Arc<dyn CompletionProvider> {
    build_provider_with_model(credential, None)
}

/// Like [`build_provider`], with an optional model id override
pub fn build_provider_with_model(
    credential: &Credential,
    model: Option<&str>,
) -> Arc<dyn CompletionProvider> {
    let client = default_client();
    let key = credential.api_key.clone();

    match credential.provider {
        ProviderKind::Claude => {
            let mut provider = ClaudeProvider::new(client, key);
            if let Some(model) = model {
                provider = provider.with_model(model);
            }
            Arc::new(provider)
        }
        ProviderKind::Gemini => {
            let mut provider = GeminiProvider::new(client, key);
            if let Some(model) = model {
                provider = provider.with_model(model);
            }
            Arc::new(provider)
        }
        ProviderKind::OpenAi => {
            let mut provider = ChatCompletionsProvider::openai(client, key);
            if let Some(model) = model {
                provider = provider.with_model(model);
            }
            Arc::new(provider)
        }
        ProviderKind::Grok => {
            let mut provider = ChatCompletionsProvider::grok(client, key);
            if let Some(model) = model {
                provider = provider.with_model(model);
            }
            Arc::new(provider)
        }
        ProviderKind::Solar => {
            let mut provider = ChatCompletionsProvider::solar(client, key);
            if let Some(model) = model {
                provider = provider.with_model(model);
            }
            Arc::new(provider)
        }
    }
}
