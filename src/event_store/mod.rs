//! Event Store module
//!
//! Reads transaction events from a directory of `.jsonl` sources.

mod error;
mod source;

pub use error::EventStoreError;
pub use source::{EventSource, JsonlReader, SOURCE_EXTENSION};
