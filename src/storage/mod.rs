//! # Storage Layer
//!
//! Persistence for the cafe's two tables.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Products | CSV, header `Name,Price,Quantity` | `{data-dir}/products.csv` |
//! | Suppliers | CSV, header `Name,ContactInfo,ProductCategory` | `{data-dir}/suppliers.csv` |
//! | Config | TOML | `{data-dir}/cafe.toml` |
//!
//! ## Persistence Model
//!
//! - A [`RecordStore`] reads its whole table when opened
//! - Every successful mutation rewrites the whole file (truncate + write)
//! - Writes are not atomic and no lock is held between operations
//! - A failed mutation leaves both memory and file untouched
//!
//! ## Key Types
//!
//! - [`Shop`] - Entry point for a data directory
//! - [`RecordStore`] - Generic table over any [`Record`] schema
//! - [`Config`] - Per-directory configuration
//! - [`StoreError`] - Everything a store operation can fail with

mod error;
mod table;
mod schema;
mod stock;
mod config;
mod shop;

pub use error::{Result, StoreError};
pub use table::{MissingTable, Record, RecordStore};
pub use config::{Config, ConfigError, Credentials};
pub use shop::{Shop, ShopError};
