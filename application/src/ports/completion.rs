//! Completion provider port
//!
//! Defines the interface for sending one prompt to a remote language
//! model and receiving plain text back. Implementations (one adapter per
//! vendor) live in the infrastructure layer.

use async_trait::async_trait;
use scholarpilot_domain::AnalystPrompt;
use thiserror::Error;

/// Errors that can occur while talking to a completion provider
#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {elapsed_secs}s")]
    Timeout { elapsed_secs: u64 },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Empty prompt")]
    EmptyPrompt,
}

/// Uniform interface to a remote language model.
///
/// One `complete` call maps to one outbound network request, bounded by a
/// fixed timeout on the order of 60 seconds. On success the provider's
/// raw textual completion is returned unparsed; every transport,
/// authentication, or malformed-envelope failure is a [`ProviderError`] —
/// never a silent empty string.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a prompt (and optional system instruction) and return the
    /// completion text.
    ///
    /// When `system_prompt` is `None`, adapters fall back to the generic
    /// analyzer persona.
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, ProviderError>;

    /// Check connectivity by issuing a trivial prompt.
    ///
    /// Returns `false` on any failure rather than propagating the error.
    async fn verify(&self) -> bool {
        match self
            .complete(AnalystPrompt::connectivity_probe(), Some("Test"))
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Provider connectivity check failed");
                false
            }
        }
    }
}

#[async_trait]
impl<T: CompletionProvider + ?Sized> CompletionProvider for &T {
    async fn complete(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, ProviderError> {
        (**self).complete(prompt, system_prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OkProvider;

    #[async_trait]
    impl CompletionProvider for OkProvider {
        async fn complete(
            &self,
            _prompt: &str,
            _system_prompt: Option<&str>,
        ) -> Result<String, ProviderError> {
            Ok("OK".to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CompletionProvider for FailingProvider {
        async fn complete(
            &self,
            _prompt: &str,
            _system_prompt: Option<&str>,
        ) -> Result<String, ProviderError> {
            Err(ProviderError::Http {
                status: 401,
                message: "invalid api key".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_verify_ok() {
        assert!(OkProvider.verify().await);
    }

    #[tokio::test]
    async fn test_verify_swallows_errors() {
        assert!(!FailingProvider.verify().await);
    }

    #[test]
    fn test_error_display() {
        let err = ProviderError::Http {
            status: 429,
            message: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 429: rate limited");
    }
}
