//! Cafe Stock - inventory and supplier records for a small cafe
//!
//! Products and suppliers live in plain CSV tables. Every change is written
//! back to disk before it becomes visible in memory, so a failed save leaves
//! both untouched.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Product, PurchaseOrder, Supplier};
pub use storage::{RecordStore, StoreError};
