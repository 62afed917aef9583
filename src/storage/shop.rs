//! Data directory management
//!
//! Handles initialization and hands out the stores for one cafe.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::config::CONFIG_FILE;
use super::table::{Record, RecordStore};
use super::Config;
use crate::domain::{Product, Supplier};

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("No cafe data in {0}. Run 'cafe init' first.")]
    NotInitialized(PathBuf),
}

const DEFAULT_CONFIG: &str = r#"# Cafe stock configuration

# Table files, relative to this directory
products_file = "products.csv"
suppliers_file = "suppliers.csv"

# What to do if a table file is missing: "fail" or "empty"
missing_table = "fail"

# Quantity below which a product counts as low stock
low_stock_threshold = 10

# Login attempts allowed by the interactive shell
max_login_attempts = 3

currency = "£"

[credentials]
username = "admin"
password = "test"
"#;

/// One cafe's data directory
pub struct Shop {
    root: PathBuf,
    config: Config,
}

impl Shop {
    /// Opens an existing data directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = Config::load(&root)?;

        let initialized = root.join(CONFIG_FILE).is_file()
            || config.products_path(&root).is_file()
            || config.suppliers_path(&root).is_file();
        if !initialized {
            return Err(ShopError::NotInitialized(root).into());
        }

        Ok(Self { root, config })
    }

    /// Creates a data directory with a default config and empty tables
    ///
    /// Existing files are left alone.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create data directory: {}", root.display()))?;

        let config_path = root.join(CONFIG_FILE);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write config: {}", config_path.display()))?;
        }

        let config = Config::load(&root)?;
        write_header::<Product>(&config.products_path(&root))?;
        write_header::<Supplier>(&config.suppliers_path(&root))?;

        Self::open(root)
    }

    /// Returns the data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads the product table
    pub fn product_store(&self) -> Result<RecordStore<Product>> {
        let path = self.config.products_path(&self.root);
        RecordStore::open(&path, self.config.missing_table)
            .with_context(|| format!("Failed to load products from {}", path.display()))
    }

    /// Loads the supplier table
    pub fn supplier_store(&self) -> Result<RecordStore<Supplier>> {
        let path = self.config.suppliers_path(&self.root);
        RecordStore::open(&path, self.config.missing_table)
            .with_context(|| format!("Failed to load suppliers from {}", path.display()))
    }
}

/// Creates a header-only table unless the file already exists
fn write_header<R: Record>(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, format!("{}\n", R::HEADER.join(",")))
        .with_context(|| format!("Failed to create table: {}", path.display()))
}
