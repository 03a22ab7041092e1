//! CLI command implementations.

pub mod export;
pub mod products;
pub mod suppliers;
pub mod validate;

use clap::Args;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Show only the first N products.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Catalog JSON file to check instead of the embedded catalog.
    #[arg(short, long)]
    pub file: Option<String>,
}

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Output file (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,
}
