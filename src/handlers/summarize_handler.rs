//! Summarize Handler
//!
//! Runs the three stages in order: load reference tables, fold every
//! transaction source into the customers, emit one document per customer.
//! The first error aborts the run.

use crate::aggregate::{AggregationStats, CustomerBook};
use crate::error::AppResult;
use crate::event_store::{EventSource, JsonlReader};
use crate::projection::{DirectorySink, DocumentSink, ProjectionError, ProjectionService};
use crate::reference::{self, ProductCatalog};

use super::SummarizeCommand;

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub customers: usize,
    pub products: usize,
    pub sources: usize,
    pub events_read: usize,
    pub events_applied: usize,
    pub events_dropped: usize,
    pub unresolved_products: usize,
    pub documents_written: usize,
}

/// Handler for summarize runs
#[derive(Debug, Clone, Copy, Default)]
pub struct SummarizeHandler;

impl SummarizeHandler {
    pub fn new() -> Self {
        Self
    }

    /// Execute the command, writing documents into the output directory
    pub fn execute(&self, command: &SummarizeCommand) -> AppResult<RunReport> {
        let (report, _) = self.run(command, || DirectorySink::create(&command.output_location))?;
        Ok(report)
    }

    /// Execute the command against a caller-provided sink
    pub fn execute_into<S: DocumentSink>(
        &self,
        command: &SummarizeCommand,
        sink: S,
    ) -> AppResult<(RunReport, S)> {
        self.run(command, || Ok(sink))
    }

    fn run<S, F>(&self, command: &SummarizeCommand, open_sink: F) -> AppResult<(RunReport, S)>
    where
        S: DocumentSink,
        F: FnOnce() -> Result<S, ProjectionError>,
    {
        let (mut customers, catalog) = self.load_references(command)?;

        let source = EventSource::new(&command.transactions_location);
        let stats = self.aggregate(&source, &mut customers)?;

        // Composition only reads from here on
        let customers = customers;
        let mut projection = ProjectionService::new(open_sink()?);
        let projected = projection.project_all(&customers, &catalog)?;

        let report = RunReport {
            customers: customers.len(),
            products: catalog.len(),
            sources: stats.sources,
            events_read: stats.events_read,
            events_applied: stats.events_applied,
            events_dropped: stats.events_dropped,
            unresolved_products: projected.unresolved_products,
            documents_written: projected.documents_written,
        };

        tracing::info!(
            customers = report.customers,
            products = report.products,
            sources = report.sources,
            events_applied = report.events_applied,
            events_dropped = report.events_dropped,
            documents_written = report.documents_written,
            "Summarize run completed"
        );

        Ok((report, projection.into_sink()))
    }

    /// Load both reference tables, customers first
    pub fn load_references(
        &self,
        command: &SummarizeCommand,
    ) -> AppResult<(CustomerBook, ProductCatalog)> {
        let customers = reference::load_customers(&command.customers_location)?;
        let catalog = reference::load_products(&command.products_location)?;
        Ok((customers, catalog))
    }

    /// Fold every source of the directory into the customer book
    pub fn aggregate(
        &self,
        source: &EventSource,
        customers: &mut CustomerBook,
    ) -> AppResult<AggregationStats> {
        let mut stats = AggregationStats::default();

        for path in source.files()? {
            let reader = JsonlReader::open(&path)?;
            let before = stats;
            customers.fold_source(reader, &mut stats)?;

            tracing::debug!(
                path = %path.display(),
                events_read = stats.events_read - before.events_read,
                events_dropped = stats.events_dropped - before.events_dropped,
                "Processed transaction source"
            );
        }

        tracing::info!(
            dir = %source.dir().display(),
            sources = stats.sources,
            events_read = stats.events_read,
            events_applied = stats.events_applied,
            events_dropped = stats.events_dropped,
            "Transactions aggregated"
        );

        Ok(stats)
    }
}
