//! Customer Aggregate
//!
//! A customer from the reference table together with the purchases
//! matched to it, in the order the events were encountered.

use crate::domain::{CustomerRecord, Purchase, TransactionEvent};

use super::Aggregate;

/// Customer Aggregate
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    customer_id: String,
    loyalty_score: String,
    purchases: Vec<Purchase>,
}

impl Customer {
    /// Create a customer with no purchases
    pub fn new(customer_id: impl Into<String>, loyalty_score: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            loyalty_score: loyalty_score.into(),
            purchases: Vec::new(),
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn loyalty_score(&self) -> &str {
        &self.loyalty_score
    }

    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }
}

impl From<CustomerRecord> for Customer {
    fn from(record: CustomerRecord) -> Self {
        Self::new(record.customer_id, record.loyalty_score)
    }
}

impl Aggregate for Customer {
    type Event = TransactionEvent;

    fn aggregate_type() -> &'static str {
        "Customer"
    }

    fn id(&self) -> &str {
        &self.customer_id
    }

    fn version(&self) -> u64 {
        self.purchases.len() as u64
    }

    fn apply(&mut self, event: Self::Event) {
        self.purchases.push(Purchase::from(event));
    }
}
