//! Core domain types shared across the analysis pipeline

pub mod document;
pub mod error;
