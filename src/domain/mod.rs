//! Domain module
//!
//! Core value types shared by the loader, aggregator and composer.

pub mod events;
pub mod records;

pub use events::TransactionEvent;
pub use records::{CustomerRecord, Product, ProductRecord, Purchase};
