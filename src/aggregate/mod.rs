//! Aggregate module
//!
//! Per-customer accumulators that transaction events are folded into.

pub mod book;
pub mod customer;

pub use book::{AggregationStats, CustomerBook};
pub use customer::Customer;

/// Aggregate trait for state built by applying events in order
pub trait Aggregate {
    /// The type of events this aggregate handles
    type Event;

    /// Get the aggregate type name (for logging)
    fn aggregate_type() -> &'static str;

    /// Get the aggregate key
    fn id(&self) -> &str;

    /// Get the current version (number of events applied)
    fn version(&self) -> u64;

    /// Apply an event to update the aggregate state
    fn apply(&mut self, event: Self::Event);
}
