//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::logging::init_logging;
use super::output::{Output, OutputFormat};
use super::{order, product, shell, stock, supplier};
use crate::storage::Shop;

#[derive(Parser)]
#[command(name = "cafe")]
#[command(author, version, about = "Stock and supplier records for a small cafe")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding cafe.toml and the table files
    #[arg(long, global = true, env = "CAFE_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a cafe data directory
    Init {
        /// Path to initialize (defaults to --data-dir)
        path: Option<PathBuf>,
    },

    /// Manage products
    #[command(subcommand)]
    Product(product::ProductCommands),

    /// Manage suppliers
    #[command(subcommand)]
    Supplier(supplier::SupplierCommands),

    /// Record deliveries, sales and stock corrections
    #[command(subcommand)]
    Stock(stock::StockCommands),

    /// Low-stock queries and purchase orders
    #[command(subcommand)]
    Order(order::OrderCommands),

    /// Log in and use the interactive menu
    Shell,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let output = Output::new(cli.format);

    tracing::debug!(data_dir = %cli.data_dir.display(), "cafe starting");

    match cli.command {
        Commands::Init { path } => {
            let root = path.unwrap_or(cli.data_dir);
            let shop = Shop::init(&root)?;
            output.success(&format!("Initialized cafe data at {}", shop.root().display()));
        }

        Commands::Product(cmd) => product::run(cmd, &Shop::open(&cli.data_dir)?, &output)?,
        Commands::Supplier(cmd) => supplier::run(cmd, &Shop::open(&cli.data_dir)?, &output)?,
        Commands::Stock(cmd) => stock::run(cmd, &Shop::open(&cli.data_dir)?, &output)?,
        Commands::Order(cmd) => order::run(cmd, &Shop::open(&cli.data_dir)?, &output)?,

        Commands::Shell => {
            let shop = Shop::open(&cli.data_dir)?;
            shell::run(&shop, io::stdin().lock(), io::stdout())?
        }
    }

    tracing::debug!("command completed");
    Ok(())
}
