//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use customer_summary::handlers::SummarizeCommand;
use customer_summary::CustomerSummary;
use tempfile::TempDir;

/// Input and output layout of one pipeline run inside a temp directory
pub struct Fixture {
    pub root: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        fs::create_dir_all(root.path().join("transactions"))
            .expect("Failed to create transactions dir");
        Self { root }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    pub fn customers(self, csv: &str) -> Self {
        fs::write(self.path("customers.csv"), csv).expect("Failed to write customers");
        self
    }

    pub fn products(self, csv: &str) -> Self {
        fs::write(self.path("products.csv"), csv).expect("Failed to write products");
        self
    }

    /// Write a file into the transactions directory
    pub fn transactions(self, file_name: &str, lines: &[&str]) -> Self {
        let mut text = lines.join("\n");
        text.push('\n');
        fs::write(self.path("transactions").join(file_name), text)
            .expect("Failed to write transactions");
        self
    }

    pub fn command(&self) -> SummarizeCommand {
        SummarizeCommand::new(
            self.path("customers.csv"),
            self.path("products.csv"),
            self.path("transactions"),
            self.path("outputs"),
        )
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path("outputs")
    }

    pub fn read_output(&self, customer_id: &str) -> CustomerSummary {
        let text = fs::read_to_string(self.output_file(customer_id))
            .expect("Failed to read output document");
        serde_json::from_str(&text).expect("Output is not a customer document")
    }

    pub fn output_file(&self, customer_id: &str) -> PathBuf {
        self.output_dir().join(format!("customer_{}.json", customer_id))
    }

    pub fn output_files(&self) -> Vec<String> {
        list_names(&self.output_dir())
    }
}

pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to list directory")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Event line in the transaction source format
pub fn event(customer_id: &str, product_id: &str, purchase_count: u64) -> String {
    serde_json::json!({
        "customer_id": customer_id,
        "product_id": product_id,
        "purchase_count": purchase_count,
    })
    .to_string()
}
