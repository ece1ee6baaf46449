//! Product Catalog
//!
//! Read-only product lookup used at composition time.

use std::collections::HashMap;

use crate::domain::{Product, ProductRecord};

/// Products keyed by `product_id`
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product; a later record with the same key replaces the earlier one
    pub fn insert(&mut self, record: ProductRecord) -> Option<Product> {
        let product_id = record.product_id.clone();
        self.products.insert(product_id, Product::from(record))
    }

    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.get(product_id)
    }

    /// Category of a product, if the product is known
    pub fn category(&self, product_id: &str) -> Option<&str> {
        self.get(product_id).map(|p| p.product_category.as_str())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<ProductRecord> for ProductCatalog {
    fn from_iter<T: IntoIterator<Item = ProductRecord>>(records: T) -> Self {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record);
        }
        catalog
    }
}
