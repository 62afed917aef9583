//! Product domain model
//!
//! A product is one line of the cafe's inventory: what it is called, what a
//! unit sells for, and how many units are on the shelf.

use serde::{Deserialize, Serialize};

use super::name::{check_name, normalize_name, ValidationError};

/// A stocked product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique name (case-insensitive)
    pub name: String,

    /// Unit price, never negative
    pub price: f64,

    /// Units on hand
    pub quantity: u32,
}

impl Product {
    /// Creates a product, trimming the name and validating the price
    pub fn new(name: &str, price: f64, quantity: u32) -> Result<Self, ValidationError> {
        let product = Self {
            name: normalize_name(name)?,
            price,
            quantity,
        };
        product.validate()?;
        Ok(product)
    }

    /// Checks the field invariants
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name(&self.name)?;
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidPrice(self.price));
        }
        Ok(())
    }

    /// Value of the units on hand
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Returns true if the quantity is strictly below the threshold
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.quantity < threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_trims_name() {
        let product = Product::new(" Espresso ", 2.5, 8).unwrap();
        assert_eq!(product.name, "Espresso");
        assert_eq!(product.price, 2.5);
        assert_eq!(product.quantity, 8);
    }

    #[test]
    fn rejects_negative_price() {
        let err = Product::new("Espresso", -0.01, 1).unwrap_err();
        assert_eq!(err, ValidationError::InvalidPrice(-0.01));
    }

    #[test]
    fn rejects_non_finite_price() {
        assert!(Product::new("Espresso", f64::NAN, 1).is_err());
        assert!(Product::new("Espresso", f64::INFINITY, 1).is_err());
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(
            Product::new("  ", 1.0, 1).unwrap_err(),
            ValidationError::EmptyName
        );
    }

    #[test]
    fn free_product_is_valid() {
        assert!(Product::new("Tap Water", 0.0, 100).is_ok());
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        let product = Product::new("Espresso", 2.5, 8).unwrap();
        assert!(product.is_low_stock(10));
        assert!(!product.is_low_stock(8));
        assert!(!product.is_low_stock(5));
    }

    #[test]
    fn stock_value_multiplies_price_by_quantity() {
        let product = Product::new("Croissant", 1.5, 4).unwrap();
        assert_eq!(product.stock_value(), 6.0);
    }
}
