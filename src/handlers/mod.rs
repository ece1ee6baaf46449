//! Command Handlers module
//!
//! Handlers that orchestrate a pipeline run across loader, aggregator
//! and projection.

mod commands;
mod summarize_handler;

pub use commands::*;
pub use summarize_handler::{RunReport, SummarizeHandler};
