//! Reference Loader
//!
//! Reads the customer and product tables (delimited, with a header row)
//! into lookup structures. Any bad row fails the whole load.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::aggregate::CustomerBook;
use crate::domain::{CustomerRecord, ProductRecord};

use super::{ProductCatalog, ReferenceError};

const CUSTOMERS_TABLE: &str = "customers";
const PRODUCTS_TABLE: &str = "products";

/// Load the customer table from a file
pub fn load_customers(path: &Path) -> Result<CustomerBook, ReferenceError> {
    let file = open_table(CUSTOMERS_TABLE, path)?;
    read_customers(path, file)
}

/// Load the customer table from any reader; `path` is used for error reporting
pub fn read_customers<R: Read>(path: &Path, reader: R) -> Result<CustomerBook, ReferenceError> {
    let records: Vec<CustomerRecord> = read_rows(CUSTOMERS_TABLE, path, reader)?;
    let rows = records.len();
    let book: CustomerBook = records.into_iter().collect();

    tracing::info!(
        path = %path.display(),
        rows = rows,
        customers = book.len(),
        "Loaded customer table"
    );
    Ok(book)
}

/// Load the product table from a file
pub fn load_products(path: &Path) -> Result<ProductCatalog, ReferenceError> {
    let file = open_table(PRODUCTS_TABLE, path)?;
    read_products(path, file)
}

/// Load the product table from any reader; `path` is used for error reporting
pub fn read_products<R: Read>(path: &Path, reader: R) -> Result<ProductCatalog, ReferenceError> {
    let records: Vec<ProductRecord> = read_rows(PRODUCTS_TABLE, path, reader)?;
    let rows = records.len();
    let catalog: ProductCatalog = records.into_iter().collect();

    tracing::info!(
        path = %path.display(),
        rows = rows,
        products = catalog.len(),
        "Loaded product table"
    );
    Ok(catalog)
}

fn open_table(table: &'static str, path: &Path) -> Result<File, ReferenceError> {
    File::open(path).map_err(|source| ReferenceError::Open {
        table,
        path: path.to_path_buf(),
        source,
    })
}

fn read_rows<T, R>(table: &'static str, path: &Path, reader: R) -> Result<Vec<T>, ReferenceError>
where
    T: DeserializeOwned,
    R: Read,
{
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| ReferenceError::Malformed {
            table,
            path: path.to_path_buf(),
            source,
        })
}
