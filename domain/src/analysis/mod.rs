//! Analysis domain: tool configurations, outcomes, and response parsing
//!
//! The types here form the input and output sides of one orchestration
//! run: a list of [`entities::ToolConfig`]s goes in, an ordered
//! [`value_objects::OutcomeMap`] comes out.

pub mod entities;
pub mod parsing;
pub mod value_objects;
