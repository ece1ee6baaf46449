//! Reference Records
//!
//! Row shapes of the customer and product reference tables, and the
//! purchase entries accumulated on a customer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TransactionEvent;

/// One row of the customer reference table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: String,

    /// Passed through to the output unmodified
    pub loyalty_score: String,
}

/// One row of the product reference table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductRecord {
    pub product_id: String,
    pub product_category: String,
}

/// Product attributes kept for lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub product_category: String,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            product_category: record.product_category,
        }
    }
}

/// A purchase recorded on a customer. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Purchase {
    /// Not required to exist in the product table
    pub product_id: Value,
    pub purchase_count: Value,
}

impl Purchase {
    /// Product key usable for lookup, if it is a string
    pub fn product_key(&self) -> Option<&str> {
        self.product_id.as_str()
    }
}

impl From<TransactionEvent> for Purchase {
    fn from(event: TransactionEvent) -> Self {
        Self {
            product_id: event.product_id,
            purchase_count: event.purchase_count,
        }
    }
}
