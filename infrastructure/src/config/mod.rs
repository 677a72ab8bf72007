//! Configuration file loading
//!
//! Settings are merged from, in priority order: environment variables
//! (`SCHOLARPILOT_*`), a project-level `scholarpilot.toml` (or
//! `.scholarpilot.toml`), a global config under the platform config
//! directory, and built-in defaults.
//!
//! The API key is never required to sit in a file: `api_key_env` names
//! an environment variable to read it from, defaulting to the
//! conventional variable for the selected provider.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use scholarpilot_domain::{Credential, ProviderKind, UnknownProviderError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while loading or resolving settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error(transparent)]
    UnknownProvider(#[from] UnknownProviderError),

    #[error("No API key configured: set `api_key` or export {env_var}")]
    MissingApiKey { env_var: String },
}

/// User-facing settings for the analysis CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Provider name: "claude", "openai", "gemini", "grok", "solar"
    pub provider: String,
    /// API key in the file itself (env var is preferred)
    pub api_key: Option<String>,
    /// Environment variable to read the key from; defaults per provider
    pub api_key_env: Option<String>,
    /// Optional model id override for the selected provider
    pub model: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            provider: "claude".to_string(),
            api_key: None,
            api_key_env: None,
            model: None,
        }
    }
}

impl Settings {
    /// Parse the configured provider name
    pub fn provider_kind(&self) -> Result<ProviderKind, ConfigError> {
        Ok(ProviderKind::from_str(&self.provider)?)
    }

    /// Conventional API key variable for a provider
    pub fn default_key_env(kind: ProviderKind) -> &'static str {
        match kind {
            ProviderKind::Claude => "ANTHROPIC_API_KEY",
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::Grok => "XAI_API_KEY",
            ProviderKind::Solar => "UPSTAGE_API_KEY",
        }
    }

    /// Resolve a credential for one orchestration run.
    ///
    /// File-configured keys win; otherwise the key env var is consulted.
    pub fn credential(&self) -> Result<Credential, ConfigError> {
        let kind = self.provider_kind()?;

        if let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            return Ok(Credential::new(kind, key));
        }

        let env_var = self
            .api_key_env
            .clone()
            .unwrap_or_else(|| Self::default_key_env(kind).to_string());

        match std::env::var(&env_var) {
            Ok(key) if !key.trim().is_empty() => Ok(Credential::new(kind, key)),
            _ => Err(ConfigError::MissingApiKey { env_var }),
        }
    }
}

/// Settings loader handling file discovery and merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `SCHOLARPILOT_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./scholarpilot.toml` or `./.scholarpilot.toml`
    /// 4. Global: `<config dir>/scholarpilot/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<Settings, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Settings::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        for filename in &["scholarpilot.toml", ".scholarpilot.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("SCHOLARPILOT_"));

        figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Load only default settings (for --no-config)
    pub fn load_defaults() -> Settings {
        Settings::default()
    }

    /// Global config file path under the platform config directory
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("scholarpilot").join("config.toml"))
    }
}
