//! Purchase order commands
//!
//! Orders are printed, never stored.

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use super::render;
use crate::domain::PurchaseOrder;
use crate::storage::Shop;

#[derive(Subcommand)]
pub enum OrderCommands {
    /// List products below the low-stock threshold with suggested orders
    LowStock {
        /// Threshold (defaults to low_stock_threshold from cafe.toml)
        #[arg(long, short)]
        threshold: Option<u32>,
    },

    /// Create a purchase order for one product
    Create {
        /// Product name
        name: String,

        /// Units to order
        quantity: u32,
    },
}

pub fn run(cmd: OrderCommands, shop: &Shop, output: &Output) -> Result<()> {
    match cmd {
        OrderCommands::LowStock { threshold } => {
            let threshold = threshold.unwrap_or(shop.config().low_stock_threshold);
            low_stock(shop, output, threshold)
        }
        OrderCommands::Create { name, quantity } => create_order(shop, output, &name, quantity),
    }
}

fn low_stock(shop: &Shop, output: &Output, threshold: u32) -> Result<()> {
    let store = shop.product_store()?;
    let low = store.low_stock(threshold);
    tracing::debug!(threshold, count = low.len(), "low stock query");

    if output.is_json() {
        let items: Vec<_> = low
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "quantity": p.quantity,
                    "suggested": PurchaseOrder::suggested_quantity(threshold, p.quantity),
                })
            })
            .collect();
        output.data(&items)?;
    } else {
        output.text(&render::low_stock_table(&low, threshold));
    }

    Ok(())
}

fn create_order(shop: &Shop, output: &Output, name: &str, quantity: u32) -> Result<()> {
    let store = shop.product_store()?;
    let product = store.get(name)?;

    let order = PurchaseOrder::new(product, quantity)?;

    if output.is_json() {
        output.data(&order)?;
    } else {
        output.text(&order.to_string());
    }

    Ok(())
}
