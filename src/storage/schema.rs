//! Row layouts for the product and supplier tables
//!
//! | Table | Header |
//! |-------|--------|
//! | Products | `Name,Price,Quantity` |
//! | Suppliers | `Name,ContactInfo,ProductCategory` |

use csv::StringRecord;

use super::table::Record;
use crate::domain::{Product, Supplier, ValidationError};

/// Reads a column by position, naming the column when it is absent
fn field<'a>(row: &'a StringRecord, index: usize, column: &str) -> Result<&'a str, String> {
    row.get(index)
        .ok_or_else(|| format!("missing {} column", column))
}

impl Record for Product {
    const KIND: &'static str = "Product";
    const HEADER: &'static [&'static str] = &["Name", "Price", "Quantity"];

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Product::validate(self)
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.price.to_string(),
            self.quantity.to_string(),
        ]
    }

    fn from_row(row: &StringRecord) -> Result<Self, String> {
        let name = field(row, 0, "Name")?;

        let price = field(row, 1, "Price")?.trim();
        let price: f64 = price
            .parse()
            .map_err(|_| format!("invalid price '{}' for {}", price, name))?;

        let quantity = field(row, 2, "Quantity")?.trim();
        let quantity: u32 = quantity
            .parse()
            .map_err(|_| format!("invalid quantity '{}' for {}", quantity, name))?;

        Product::new(name, price, quantity).map_err(|e| e.to_string())
    }
}

impl Record for Supplier {
    const KIND: &'static str = "Supplier";
    const HEADER: &'static [&'static str] = &["Name", "ContactInfo", "ProductCategory"];

    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Supplier::validate(self)
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.contact.clone(),
            self.category.clone(),
        ]
    }

    fn from_row(row: &StringRecord) -> Result<Self, String> {
        let name = field(row, 0, "Name")?;
        let contact = field(row, 1, "ContactInfo")?;
        let category = field(row, 2, "ProductCategory")?;

        Supplier::new(name, contact, category).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_row_layout_matches_header() {
        let product = Product::new("Espresso", 2.5, 8).unwrap();
        assert_eq!(product.to_row(), vec!["Espresso", "2.5", "8"]);
        assert_eq!(product.to_row().len(), Product::HEADER.len());
    }

    #[test]
    fn product_row_parses_padded_numbers() {
        let row = StringRecord::from(vec!["Espresso", " 2.50", "8 "]);
        let product = Product::from_row(&row).unwrap();

        assert_eq!(product.price, 2.5);
        assert_eq!(product.quantity, 8);
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let row = StringRecord::from(vec!["Espresso", "2.50", "-1"]);
        let reason = Product::from_row(&row).unwrap_err();
        assert!(reason.contains("invalid quantity '-1'"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let row = StringRecord::from(vec!["Espresso", "-2.50", "1"]);
        assert!(Product::from_row(&row).is_err());
    }

    #[test]
    fn blank_name_is_rejected() {
        let row = StringRecord::from(vec!["", "2.50", "1"]);
        assert!(Product::from_row(&row).is_err());
    }

    #[test]
    fn supplier_row_layout_matches_header() {
        let supplier = Supplier::new("Bean Co", "orders@bean.co", "Coffee").unwrap();
        let row = StringRecord::from(supplier.to_row());

        assert_eq!(Supplier::from_row(&row).unwrap(), supplier);
        assert_eq!(Supplier::HEADER, &["Name", "ContactInfo", "ProductCategory"]);
    }
}
