//! Redline CLI - Command line tool for the Redline storefront catalog.
//!
//! Commands:
//! - `redline products` - List products
//! - `redline product` - Show one product and its supplier
//! - `redline suppliers` - List suppliers
//! - `redline validate` - Check catalog integrity
//! - `redline export` - Write the catalog as JSON

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ExportArgs, ProductArgs, ProductsArgs, ValidateArgs};

/// Redline CLI - Inspect and export the storefront catalog
#[derive(Parser)]
#[command(name = "redline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products in display order
    Products(ProductsArgs),

    /// Show a single product
    Product(ProductArgs),

    /// List suppliers
    Suppliers,

    /// Check catalog integrity
    Validate(ValidateArgs),

    /// Export the catalog as JSON
    Export(ExportArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    if let Err(e) = run(cli, output.clone()) {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: output::Output) -> Result<()> {
    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx),
        Commands::Product(args) => commands::products::show(args, &ctx),
        Commands::Suppliers => commands::suppliers::run(&ctx),
        Commands::Validate(args) => commands::validate::run(args, &ctx),
        Commands::Export(args) => commands::export::run(args, &ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_config_fails_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("redline.toml");
        std::fs::write(&path, "[validation]\nwarnings_as_errors = tru\n").unwrap();

        let cli = Cli::parse_from([
            "redline",
            "--json",
            "--config",
            path.to_str().unwrap(),
            "validate",
        ]);
        let err = run(cli, output::Output::new(false, true)).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config"));
    }

    #[test]
    fn test_run_dispatches_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("redline.toml");
        std::fs::write(&path, "").unwrap();

        let cli = Cli::parse_from([
            "redline",
            "--json",
            "--config",
            path.to_str().unwrap(),
            "product",
            "404",
        ]);
        let err = run(cli, output::Output::new(false, true)).unwrap_err();
        assert!(format!("{:#}", err).contains("Product not found: 404"));
    }
}
