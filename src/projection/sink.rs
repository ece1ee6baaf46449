//! Document Sinks
//!
//! Destinations for composed documents, one named artifact per customer.

use std::fs;
use std::path::{Path, PathBuf};

use super::{CustomerSummary, ProjectionError};

/// A destination that accepts one document per customer key
pub trait DocumentSink {
    fn write(&mut self, customer_id: &str, document: &CustomerSummary)
        -> Result<(), ProjectionError>;
}

/// File name used for a customer's document
pub fn document_file_name(customer_id: &str) -> Result<String, ProjectionError> {
    let unsafe_name = customer_id.is_empty()
        || customer_id == "."
        || customer_id == ".."
        || customer_id.contains(['/', '\\', '\0']);

    if unsafe_name {
        return Err(ProjectionError::InvalidDocumentName {
            customer_id: customer_id.to_string(),
        });
    }
    Ok(format!("customer_{}.json", customer_id))
}

/// Writes each document as pretty-printed JSON into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create the sink, creating the directory if it does not exist
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, ProjectionError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| ProjectionError::CreateDirectory {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a customer's document
    pub fn document_path(&self, customer_id: &str) -> Result<PathBuf, ProjectionError> {
        Ok(self.dir.join(document_file_name(customer_id)?))
    }
}

impl DocumentSink for DirectorySink {
    fn write(
        &mut self,
        customer_id: &str,
        document: &CustomerSummary,
    ) -> Result<(), ProjectionError> {
        let path = self.document_path(customer_id)?;
        let bytes =
            serde_json::to_vec_pretty(document).map_err(|source| ProjectionError::Serialize {
                customer_id: customer_id.to_string(),
                source,
            })?;

        fs::write(&path, bytes).map_err(|source| ProjectionError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Wrote customer document");
        Ok(())
    }
}

/// Keeps documents in memory, in emission order
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    documents: Vec<(String, CustomerSummary)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, customer_id: &str) -> Option<&CustomerSummary> {
        self.documents
            .iter()
            .find(|(key, _)| key == customer_id)
            .map(|(_, document)| document)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.documents.iter().map(|(key, _)| key.as_str())
    }
}

impl DocumentSink for MemorySink {
    fn write(
        &mut self,
        customer_id: &str,
        document: &CustomerSummary,
    ) -> Result<(), ProjectionError> {
        self.documents.push((customer_id.to_string(), document.clone()));
        Ok(())
    }
}
