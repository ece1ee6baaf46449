//! Command definitions
//!
//! Commands describe one run of the pipeline.

use std::path::PathBuf;

use crate::config::Config;

/// Command to summarize all customers into the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeCommand {
    pub customers_location: PathBuf,
    pub products_location: PathBuf,
    pub transactions_location: PathBuf,
    pub output_location: PathBuf,
}

impl SummarizeCommand {
    pub fn new(
        customers_location: impl Into<PathBuf>,
        products_location: impl Into<PathBuf>,
        transactions_location: impl Into<PathBuf>,
        output_location: impl Into<PathBuf>,
    ) -> Self {
        Self {
            customers_location: customers_location.into(),
            products_location: products_location.into(),
            transactions_location: transactions_location.into(),
            output_location: output_location.into(),
        }
    }
}

impl From<&Config> for SummarizeCommand {
    fn from(config: &Config) -> Self {
        Self::new(
            &config.customers_location,
            &config.products_location,
            &config.transactions_location,
            &config.output_location,
        )
    }
}
