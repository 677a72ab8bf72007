//! Provider identity and credentials
//!
//! [`ProviderKind`] is an explicit tagged union of the supported model
//! vendors; the infrastructure layer maps each kind to a concrete HTTP
//! adapter. Keeping the set closed makes "unknown provider" a parse-time
//! error instead of a runtime dispatch failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported completion providers (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Anthropic Claude (Messages API)
    Claude,
    /// OpenAI (chat completions)
    OpenAi,
    /// Google Gemini (generateContent)
    Gemini,
    /// xAI Grok (chat completions)
    Grok,
    /// Upstage Solar (chat completions)
    Solar,
}

/// Error for unrecognized provider names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown provider: {0}")]
pub struct UnknownProviderError(pub String);

impl ProviderKind {
    /// Get the string identifier for this provider
    pub fn as_str(&self) -> &str {
        match self {
            ProviderKind::Claude => "claude",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Grok => "grok",
            ProviderKind::Solar => "solar",
        }
    }

    /// All supported providers
    pub fn all() -> &'static [ProviderKind] {
        &[
            ProviderKind::Claude,
            ProviderKind::OpenAi,
            ProviderKind::Gemini,
            ProviderKind::Grok,
            ProviderKind::Solar,
        ]
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = UnknownProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "claude" => Ok(ProviderKind::Claude),
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            "grok" => Ok(ProviderKind::Grok),
            "solar" => Ok(ProviderKind::Solar),
            other => Err(UnknownProviderError(other.to_string())),
        }
    }
}

/// Credential for constructing one provider instance.
///
/// Opaque to the core beyond selecting the adapter; its lifecycle is owned
/// by the caller, which fetches it from configuration before each run. The
/// core never caches credentials.
#[derive(Debug, Clone)]
pub struct Credential {
    pub provider: ProviderKind,
    pub api_key: String,
}

impl Credential {
    pub fn new(provider: ProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
        }
    }
}
