//! customer_summary Library
//!
//! Loader, aggregator and projection stages of the summarize pipeline,
//! re-exported for the binaries and integration tests.

pub mod aggregate;
pub mod config;
pub mod domain;
mod error;
pub mod event_store;
pub mod handlers;
pub mod projection;
pub mod reference;

pub use aggregate::{Customer, CustomerBook};
pub use config::Config;
pub use domain::{Purchase, TransactionEvent};
pub use error::{AppError, AppResult, ErrorKind};
pub use projection::CustomerSummary;
pub use reference::ProductCatalog;
