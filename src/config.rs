//! Configuration module
//!
//! Loads configuration from environment variables, with defaults.
//! Command-line flags override through the `with_*` builders.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_CUSTOMERS_LOCATION: &str = "./input_data/starter/customers.csv";
const DEFAULT_PRODUCTS_LOCATION: &str = "./input_data/starter/products.csv";
const DEFAULT_TRANSACTIONS_LOCATION: &str = "./input_data/starter/transactions/";
const DEFAULT_OUTPUT_LOCATION: &str = "./output_data/outputs/";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT")),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Customer reference table (CSV)
    pub customers_location: PathBuf,

    /// Product reference table (CSV)
    pub products_location: PathBuf,

    /// Directory holding `.jsonl` transaction sources
    pub transactions_location: PathBuf,

    /// Directory receiving one document per customer
    pub output_location: PathBuf,

    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            customers_location: DEFAULT_CUSTOMERS_LOCATION.into(),
            products_location: DEFAULT_PRODUCTS_LOCATION.into(),
            transactions_location: DEFAULT_TRANSACTIONS_LOCATION.into(),
            output_location: DEFAULT_OUTPUT_LOCATION.into(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let path = |key: &str, default: PathBuf| lookup(key).map(PathBuf::from).unwrap_or(default);

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            customers_location: path("CUSTOMERS_LOCATION", defaults.customers_location),
            products_location: path("PRODUCTS_LOCATION", defaults.products_location),
            transactions_location: path("TRANSACTIONS_LOCATION", defaults.transactions_location),
            output_location: path("OUTPUT_LOCATION", defaults.output_location),
            log_format,
        })
    }

    pub fn with_customers_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.customers_location = path.into();
        self
    }

    pub fn with_products_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.products_location = path.into();
        self
    }

    pub fn with_transactions_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.transactions_location = path.into();
        self
    }

    pub fn with_output_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_location = path.into();
        self
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
