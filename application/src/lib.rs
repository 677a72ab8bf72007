//! Application layer for scholarpilot
//!
//! This crate contains the analysis use case, port definitions, the
//! extraction tools, and the tool registry. It depends only on the domain
//! layer; concrete provider adapters live in infrastructure.

pub mod ports;
pub mod retry;
pub mod tools;
pub mod use_cases;

// Re-export commonly used types
pub use ports::completion::{CompletionProvider, ProviderError};
pub use retry::{retry_with_backoff, RetryPolicy};
pub use tools::{registry::ToolCatalog, ExtractionTool, ToolParams};
pub use use_cases::analyze_document::AnalyzeDocumentUseCase;
