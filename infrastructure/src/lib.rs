//! Infrastructure layer for scholarpilot
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: one HTTP adapter per completion provider, the
//! provider factory, and configuration file loading.

pub mod config;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigError, Settings, SettingsLoader};
pub use providers::{
    build_provider, build_provider_with_model, claude::ClaudeProvider, gemini::GeminiProvider,
    openai_compat::ChatCompletionsProvider, REQUEST_TIMEOUT,
};
