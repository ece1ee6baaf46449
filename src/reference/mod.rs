//! Reference module
//!
//! Keyed lookup tables loaded once before any event is processed.

mod catalog;
mod error;
mod loader;

pub use catalog::ProductCatalog;
pub use error::ReferenceError;
pub use loader::{load_customers, load_products, read_customers, read_products};
