//! Projection module
//!
//! Derives the per-customer summary documents from the aggregated
//! customers and writes them out.

mod document;
mod error;
mod service;
mod sink;

pub use document::{compose, CustomerSummary, PurchaseLine};
pub use error::ProjectionError;
pub use service::{ProjectionService, ProjectionStats};
pub use sink::{document_file_name, DirectorySink, DocumentSink, MemorySink};
