//! Projection Service
//!
//! Composes one document per customer and hands it to a sink.
//! Reads the customer book and product catalog, never modifies them.

use crate::aggregate::CustomerBook;
use crate::reference::ProductCatalog;

use super::{compose, DocumentSink, ProjectionError};

/// Counters collected while emitting documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionStats {
    pub documents_written: usize,

    /// Purchases whose product is not in the catalog
    pub unresolved_products: usize,
}

/// Projection Service for emitting customer summaries
#[derive(Debug)]
pub struct ProjectionService<S> {
    sink: S,
}

impl<S: DocumentSink> ProjectionService<S> {
    /// Create a new ProjectionService
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Emit a document for every customer, including those without purchases.
    /// Stops at the first sink failure.
    pub fn project_all(
        &mut self,
        customers: &CustomerBook,
        catalog: &ProductCatalog,
    ) -> Result<ProjectionStats, ProjectionError> {
        let mut stats = ProjectionStats::default();

        for customer in customers.iter() {
            let document = compose(customer, catalog);
            stats.unresolved_products += customer
                .purchases()
                .iter()
                .filter(|p| p.product_key().and_then(|id| catalog.get(id)).is_none())
                .count();

            self.sink.write(customer.customer_id(), &document)?;
            stats.documents_written += 1;
        }

        tracing::info!(
            documents_written = stats.documents_written,
            unresolved_products = stats.unresolved_products,
            "Customer documents emitted"
        );

        Ok(stats)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
