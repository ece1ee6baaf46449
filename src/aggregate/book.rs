//! Customer Book
//!
//! The keyed set of customer aggregates. Keys are fixed once the reference
//! table is loaded; folding events only appends purchases.

use std::collections::BTreeMap;

use crate::domain::{CustomerRecord, TransactionEvent};
use crate::event_store::EventStoreError;

use super::{Aggregate, Customer};

/// Counters collected while folding events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationStats {
    /// Sources fully consumed
    pub sources: usize,

    /// Events successfully decoded
    pub events_read: usize,

    /// Events appended to a known customer
    pub events_applied: usize,

    /// Events whose customer is not in the reference table
    pub events_dropped: usize,
}

/// Customers keyed by `customer_id`, iterated in key order
#[derive(Debug, Clone, Default)]
pub struct CustomerBook {
    customers: BTreeMap<String, Customer>,
}

impl CustomerBook {
    /// Create an empty book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a customer; a later record with the same key replaces the earlier one
    pub fn insert(&mut self, customer: Customer) -> Option<Customer> {
        self.customers.insert(customer.id().to_string(), customer)
    }

    pub fn get(&self, customer_id: &str) -> Option<&Customer> {
        self.customers.get(customer_id)
    }

    pub fn contains(&self, customer_id: &str) -> bool {
        self.customers.contains_key(customer_id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Iterate customers in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    /// Apply one event to its owning customer.
    /// Returns false, with no side effect, when the customer is unknown
    /// or the event's customer key is not a string.
    pub fn apply_event(&mut self, event: TransactionEvent) -> bool {
        let customer = match event.customer_key() {
            Some(key) => self.customers.get_mut(key),
            None => None,
        };

        match customer {
            Some(customer) => {
                customer.apply(event);
                tracing::trace!(
                    customer_id = customer.id(),
                    version = customer.version(),
                    "Purchase appended"
                );
                true
            }
            None => {
                tracing::debug!(
                    customer_id = %event.customer_id,
                    product_id = %event.product_id,
                    "Dropping event for unknown {}",
                    Customer::aggregate_type()
                );
                false
            }
        }
    }

    /// Fold a whole source into the book, stopping at the first error
    pub fn fold_source<I>(
        &mut self,
        events: I,
        stats: &mut AggregationStats,
    ) -> Result<(), EventStoreError>
    where
        I: IntoIterator<Item = Result<TransactionEvent, EventStoreError>>,
    {
        for event in events {
            let event = event?;
            stats.events_read += 1;

            if self.apply_event(event) {
                stats.events_applied += 1;
            } else {
                stats.events_dropped += 1;
            }
        }

        stats.sources += 1;
        Ok(())
    }
}

impl FromIterator<CustomerRecord> for CustomerBook {
    fn from_iter<T: IntoIterator<Item = CustomerRecord>>(records: T) -> Self {
        let mut book = Self::new();
        for record in records {
            book.insert(Customer::from(record));
        }
        book
    }
}
