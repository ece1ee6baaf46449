//! Event Store Errors
//!
//! Error types for reading transaction sources.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading transaction events
#[derive(Debug, thiserror::Error)]
pub enum EventStoreError {
    /// The transactions directory could not be listed
    #[error("Cannot list transactions directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A source file could not be opened
    #[error("Cannot open transaction source {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line could not be read
    #[error("Cannot read line {line} of {path}: {source}")]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    /// A line is not a valid transaction event
    #[error("Invalid transaction event at {path}:{line}: {source}")]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
