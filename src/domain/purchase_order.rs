//! Purchase orders
//!
//! A purchase order is displayed to the user and then forgotten. Nothing about
//! it is written back to either table.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fmt;

use super::name::ValidationError;
use super::product::Product;

/// An order for more units of one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseOrder {
    pub product: String,
    pub quantity: u32,
    pub date: NaiveDate,
}

impl PurchaseOrder {
    /// Creates an order dated today
    pub fn new(product: &Product, quantity: u32) -> Result<Self, ValidationError> {
        Self::dated(product, quantity, Local::now().date_naive())
    }

    /// Creates an order with an explicit date
    pub fn dated(product: &Product, quantity: u32, date: NaiveDate) -> Result<Self, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        Ok(Self {
            product: product.name.clone(),
            quantity,
            date,
        })
    }

    /// Suggested reorder amount: enough to reach twice the threshold
    pub fn suggested_quantity(threshold: u32, current: u32) -> u32 {
        threshold.saturating_mul(2).saturating_sub(current)
    }
}

impl fmt::Display for PurchaseOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Purchase Order ---")?;
        writeln!(f, "Date:     {}", self.date.format("%Y-%m-%d"))?;
        writeln!(f, "Product:  {}", self.product)?;
        writeln!(f, "Quantity: {}", self.quantity)?;
        write!(f, "{}", "-".repeat(22))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn espresso() -> Product {
        Product::new("Espresso", 2.5, 8).unwrap()
    }

    #[test]
    fn order_copies_product_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let order = PurchaseOrder::dated(&espresso(), 12, date).unwrap();

        assert_eq!(order.product, "Espresso");
        assert_eq!(order.quantity, 12);
        assert_eq!(order.date, date);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        assert_eq!(
            PurchaseOrder::new(&espresso(), 0).unwrap_err(),
            ValidationError::ZeroQuantity
        );
    }

    #[test]
    fn suggested_quantity_tops_up_to_twice_threshold() {
        assert_eq!(PurchaseOrder::suggested_quantity(10, 8), 12);
        assert_eq!(PurchaseOrder::suggested_quantity(10, 0), 20);
        assert_eq!(PurchaseOrder::suggested_quantity(10, 25), 0);
    }

    #[test]
    fn display_lists_every_field() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let order = PurchaseOrder::dated(&espresso(), 12, date).unwrap();
        let text = order.to_string();

        assert!(text.contains("Date:     2024-03-01"));
        assert!(text.contains("Product:  Espresso"));
        assert!(text.contains("Quantity: 12"));
    }
}
