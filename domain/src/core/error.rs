//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Document is empty")]
    EmptyDocument,

    #[error("No tool configurations supplied")]
    NoToolConfigs,

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}
