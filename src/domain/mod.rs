//! Domain models for the cafe record-keeper
//!
//! Contains the record shapes and their validation, without any I/O concerns.

mod name;
mod product;
mod supplier;
mod purchase_order;

pub use name::{check_name, normalize_name, same_name, ValidationError};
pub use product::Product;
pub use supplier::Supplier;
pub use purchase_order::PurchaseOrder;
