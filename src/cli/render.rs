//! Text rendering shared by the subcommands and the interactive shell
//!
//! Everything here returns a `String` so the shell can write to any sink.

use std::fmt::Write;

use crate::domain::{Product, PurchaseOrder, Supplier};
use crate::storage::Config;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// All products as a table
pub fn product_table(products: &[Product], config: &Config) -> String {
    if products.is_empty() {
        return "No products".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<30} {:>10} {:>10}", "PRODUCT", "PRICE", "QUANTITY");
    let _ = writeln!(out, "{}", rule());
    for product in products {
        let _ = writeln!(
            out,
            "{:<30} {:>10} {:>10}",
            product.name,
            config.money(product.price),
            product.quantity
        );
    }
    out.trim_end().to_string()
}

/// One product's fields
pub fn product_details(product: &Product, config: &Config) -> String {
    format!(
        "Name:          {}\nPrice:         {}\nCurrent Stock: {}",
        product.name,
        config.money(product.price),
        product.quantity
    )
}

/// All suppliers as a table
pub fn supplier_table(suppliers: &[Supplier]) -> String {
    if suppliers.is_empty() {
        return "No suppliers".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<25} {:<25} CONTACT", "SUPPLIER", "CATEGORY");
    let _ = writeln!(out, "{}", rule());
    for supplier in suppliers {
        let _ = writeln!(
            out,
            "{:<25} {:<25} {}",
            supplier.name, supplier.category, supplier.contact
        );
    }
    out.trim_end().to_string()
}

/// One supplier's fields
pub fn supplier_details(supplier: &Supplier) -> String {
    format!(
        "Name:             {}\nContact:          {}\nProduct Category: {}",
        supplier.name, supplier.contact, supplier.category
    )
}

/// Stock report: every product plus the total value on hand
pub fn stock_report(products: &[Product], total_value: f64, config: &Config) -> String {
    format!(
        "{}\n\nTotal stock value: {}",
        product_table(products, config),
        config.money(total_value)
    )
}

/// Low-stock products with a suggested order size each
pub fn low_stock_table(products: &[Product], threshold: u32) -> String {
    if products.is_empty() {
        return format!("No products below {} units", threshold);
    }

    let mut out = String::new();
    let _ = writeln!(out, "Products below {} units:", threshold);
    let _ = writeln!(out, "{:<30} {:>10} {:>10}", "PRODUCT", "CURRENT", "SUGGESTED");
    let _ = writeln!(out, "{}", rule());
    for product in products {
        let _ = writeln!(
            out,
            "{:<30} {:>10} {:>10}",
            product.name,
            product.quantity,
            PurchaseOrder::suggested_quantity(threshold, product.quantity)
        );
    }
    out.trim_end().to_string()
}
