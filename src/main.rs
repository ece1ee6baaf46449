//! customer_summary - per-customer purchase summaries
//!
//! Joins the customer and product reference tables with a directory of
//! transaction sources and writes one JSON document per customer.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use customer_summary::config::LogFormat;
use customer_summary::handlers::{RunReport, SummarizeCommand, SummarizeHandler};
use customer_summary::{AppError, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "customer_summary")]
#[command(about = "Summarize customer purchases into one JSON document per customer")]
#[command(
    after_help = "Environment:\n  CUSTOMERS_LOCATION, PRODUCTS_LOCATION, TRANSACTIONS_LOCATION, OUTPUT_LOCATION\n  LOG_FORMAT (text|json), RUST_LOG"
)]
struct Cli {
    #[arg(long = "customers_location", visible_alias = "customers-location")]
    customers_location: Option<PathBuf>,
    #[arg(long = "products_location", visible_alias = "products-location")]
    products_location: Option<PathBuf>,
    #[arg(long = "transactions_location", visible_alias = "transactions-location")]
    transactions_location: Option<PathBuf>,
    #[arg(long = "output_location", visible_alias = "output-location")]
    output_location: Option<PathBuf>,
}

/// Initialize tracing/logging
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "customer_summary=info".into());

    match format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }
}

fn load_config(cli: Cli) -> Result<Config, AppError> {
    let mut config = Config::from_env()?;

    if let Some(path) = cli.customers_location {
        config = config.with_customers_location(path);
    }
    if let Some(path) = cli.products_location {
        config = config.with_products_location(path);
    }
    if let Some(path) = cli.transactions_location {
        config = config.with_transactions_location(path);
    }
    if let Some(path) = cli.output_location {
        config = config.with_output_location(path);
    }

    Ok(config)
}

fn run(cli: Cli) -> Result<RunReport, AppError> {
    let config = load_config(cli)?;
    init_tracing(config.log_format);

    tracing::info!(
        customers = %config.customers_location.display(),
        products = %config.products_location.display(),
        transactions = %config.transactions_location.display(),
        output = %config.output_location.display(),
        "Starting summarize run"
    );

    SummarizeHandler::new().execute(&SummarizeCommand::from(&config))
}

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => {
            println!("Data processing completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "Summarize run failed");
            eprintln!("An error occurred: {}", e);
            ExitCode::from(e.kind().exit_code())
        }
    }
}
