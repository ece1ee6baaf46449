//! Customer Summary Document
//!
//! The per-customer output: purchases in encounter order, each with its
//! product category resolved against the catalog.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::aggregate::Customer;
use crate::reference::ProductCatalog;

/// One composed output document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub customer_id: String,
    pub loyalty_score: String,
    pub purchases: Vec<PurchaseLine>,
}

/// A purchase with its resolved category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseLine {
    pub product_id: Value,

    /// Empty when the product is not in the catalog
    pub product_category: String,
    pub purchase_count: Value,
}

/// Compose the summary document for a customer
pub fn compose(customer: &Customer, catalog: &ProductCatalog) -> CustomerSummary {
    let purchases = customer
        .purchases()
        .iter()
        .map(|purchase| PurchaseLine {
            product_id: purchase.product_id.clone(),
            product_category: purchase
                .product_key()
                .and_then(|id| catalog.category(id))
                .unwrap_or_default()
                .to_string(),
            purchase_count: purchase.purchase_count.clone(),
        })
        .collect();

    CustomerSummary {
        customer_id: customer.customer_id().to_string(),
        loyalty_score: customer.loyalty_score().to_string(),
        purchases,
    }
}
