//! Transaction Events
//!
//! One event per line of a transaction source. Events are folded into
//! the owning customer and not retained afterwards.
//!
//! Field values are kept as raw JSON: only their presence is required.
//! A key that is not a JSON string can never match a reference key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single purchase event linking a customer to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionEvent {
    /// Owning customer key (may be unknown to the reference table)
    pub customer_id: Value,

    /// Purchased product key (may be unknown to the reference table)
    pub product_id: Value,

    /// Count exactly as it appeared in the source
    pub purchase_count: Value,
}

impl TransactionEvent {
    /// Create a new event
    pub fn new(
        customer_id: impl Into<Value>,
        product_id: impl Into<Value>,
        purchase_count: impl Into<Value>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            product_id: product_id.into(),
            purchase_count: purchase_count.into(),
        }
    }

    /// Customer key usable for lookup, if it is a string
    pub fn customer_key(&self) -> Option<&str> {
        self.customer_id.as_str()
    }
}
