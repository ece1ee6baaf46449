//! Reference Loader Errors

use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading a reference table
#[derive(Debug, thiserror::Error)]
pub enum ReferenceError {
    /// The table file could not be opened
    #[error("Cannot open {table} table {path}: {source}")]
    Open {
        table: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row is missing a required column or cannot be parsed
    #[error("Malformed {table} table {path}: {source}")]
    Malformed {
        table: &'static str,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
