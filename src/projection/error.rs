//! Projection Errors

use std::io;
use std::path::PathBuf;

/// Errors that can occur while emitting customer documents
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    /// The output directory could not be created
    #[error("Cannot create output directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The customer key cannot be used as part of a file name
    #[error("Customer id {customer_id:?} cannot be used as an output file name")]
    InvalidDocumentName { customer_id: String },

    /// The document could not be serialized
    #[error("Cannot serialize document for customer {customer_id}: {source}")]
    Serialize {
        customer_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be written
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
