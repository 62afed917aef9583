//! Stock movements on the product table
//!
//! Receiving deliveries, recording sales and manual corrections all change a
//! single product's quantity and then save the table like any other update.

use super::error::{Result, StoreError};
use super::table::RecordStore;
use crate::domain::{Product, ValidationError};

impl RecordStore<Product> {
    /// Adds a delivery of `quantity` units
    pub fn receive_stock(&mut self, name: &str, quantity: u32) -> Result<Product> {
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity.into());
        }

        let product = self.modify(name, |product| {
            product.quantity = product.quantity.checked_add(quantity).ok_or_else(|| {
                StoreError::InvalidInput(format!(
                    "receiving {} units would overflow the stock of {}",
                    quantity, product.name
                ))
            })?;
            Ok(())
        })?;

        tracing::info!(product = %product.name, quantity, total = product.quantity, "received stock");
        Ok(product)
    }

    /// Removes `quantity` sold units, refusing to go below zero
    pub fn record_sale(&mut self, name: &str, quantity: u32) -> Result<Product> {
        if quantity == 0 {
            return Err(ValidationError::ZeroQuantity.into());
        }

        let product = self.modify(name, |product| {
            if quantity > product.quantity {
                return Err(StoreError::InsufficientStock {
                    name: product.name.clone(),
                    requested: quantity,
                    available: product.quantity,
                });
            }
            product.quantity -= quantity;
            Ok(())
        })?;

        tracing::info!(product = %product.name, quantity, total = product.quantity, "recorded sale");
        Ok(product)
    }

    /// Overwrites the quantity after a stock count
    ///
    /// The reason is logged, not stored.
    pub fn adjust_stock(&mut self, name: &str, quantity: u32, reason: &str) -> Result<Product> {
        let mut previous = 0;
        let product = self.modify(name, |product| {
            previous = product.quantity;
            product.quantity = quantity;
            Ok(())
        })?;

        tracing::info!(
            product = %product.name,
            from = previous,
            to = quantity,
            reason,
            "adjusted stock"
        );
        Ok(product)
    }

    /// Products with fewer than `threshold` units, in table order
    pub fn low_stock(&self, threshold: u32) -> Vec<Product> {
        self.records()
            .iter()
            .filter(|p| p.is_low_stock(threshold))
            .cloned()
            .collect()
    }

    /// Total value of everything on the shelves
    pub fn stock_value(&self) -> f64 {
        self.records().iter().map(Product::stock_value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MissingTable;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_with(dir: &TempDir, rows: &str) -> RecordStore<Product> {
        let path = dir.path().join("products.csv");
        fs::write(&path, format!("Name,Price,Quantity\n{}", rows)).unwrap();
        RecordStore::open(path, MissingTable::Fail).unwrap()
    }

    fn reload(store: &RecordStore<Product>) -> RecordStore<Product> {
        RecordStore::open(store.path(), MissingTable::Fail).unwrap()
    }

    #[test]
    fn receive_increases_quantity_and_saves() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, "Espresso,2.50,8\n");

        let product = store.receive_stock("espresso", 12).unwrap();
        assert_eq!(product.quantity, 20);
        assert_eq!(reload(&store).find("Espresso").unwrap().quantity, 20);
    }

    #[test]
    fn receive_zero_is_invalid() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, "Espresso,2.50,8\n");

        let err = store.receive_stock("Espresso", 0).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test]
    fn receive_overflow_is_invalid() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, &format!("Espresso,2.50,{}\n", u32::MAX));

        let err = store.receive_stock("Espresso", 1).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(store.find("Espresso").unwrap().quantity, u32::MAX);
    }

    #[test]
    fn receive_unknown_product_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, "");

        let err = store.receive_stock("Espresso", 1).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn sale_decreases_quantity() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, "Espresso,2.50,8\n");

        assert_eq!(store.record_sale("Espresso", 8).unwrap().quantity, 0);
        assert_eq!(reload(&store).find("Espresso").unwrap().quantity, 0);
    }

    #[test]
    fn oversized_sale_is_rejected_entirely() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, "Espresso,2.50,8\n");
        let before = fs::read_to_string(store.path()).unwrap();

        let err = store.record_sale("Espresso", 9).unwrap_err();
        match err {
            StoreError::InsufficientStock {
                requested,
                available,
                ..
            } => {
                assert_eq!(requested, 9);
                assert_eq!(available, 8);
            }
            other => panic!("expected insufficient stock, got {:?}", other),
        }

        assert_eq!(store.find("Espresso").unwrap().quantity, 8);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn adjust_sets_quantity_unconditionally() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, "Espresso,2.50,8\n");

        let product = store.adjust_stock("Espresso", 3, "wastage").unwrap();
        assert_eq!(product.quantity, 3);

        let product = store.adjust_stock("Espresso", 40, "inventory correction").unwrap();
        assert_eq!(product.quantity, 40);
        assert_eq!(reload(&store).find("Espresso").unwrap().quantity, 40);
    }

    #[test]
    fn adjust_unknown_product_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut store = store_with(&dir, "");

        let err = store.adjust_stock("Espresso", 3, "count").unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn low_stock_uses_strict_threshold() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "Espresso,2.50,8\n");

        let low: Vec<_> = store.low_stock(10).into_iter().map(|p| p.name).collect();
        assert_eq!(low, vec!["Espresso"]);
        assert!(store.low_stock(5).is_empty());
        assert!(store.low_stock(8).is_empty());
    }

    #[test]
    fn low_stock_keeps_table_order() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "Scone,2,1\nEspresso,2.50,30\nMilk,1,4\n");

        let low: Vec<_> = store.low_stock(10).into_iter().map(|p| p.name).collect();
        assert_eq!(low, vec!["Scone", "Milk"]);
    }

    #[test]
    fn stock_value_sums_products() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, "Scone,2,1\nEspresso,2.50,4\n");

        assert_eq!(store.stock_value(), 12.0);
    }

    proptest! {
        #[test]
        fn receive_then_sell_restores_quantity(start in 0u32..10_000, qty in 1u32..10_000) {
            let dir = TempDir::new().unwrap();
            let mut store = store_with(&dir, &format!("Espresso,2.50,{}\n", start));

            store.receive_stock("Espresso", qty).unwrap();
            let product = store.record_sale("ESPRESSO", qty).unwrap();

            prop_assert_eq!(product.quantity, start);
            prop_assert_eq!(reload(&store).find("espresso").unwrap().quantity, start);
        }

        #[test]
        fn lookup_ignores_ascii_case(name in "[A-Za-z][A-Za-z ]{0,15}[A-Za-z]") {
            let dir = TempDir::new().unwrap();
            let mut store = store_with(&dir, "");
            store.add(Product::new(&name, 1.0, 1).unwrap()).unwrap();

            prop_assert!(store.find(&name.to_lowercase()).is_some());
            prop_assert!(store.find(&name.to_uppercase()).is_some());
        }
    }
}
