//! Stock CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use super::render;
use crate::domain::Product;
use crate::storage::Shop;

#[derive(Subcommand)]
pub enum StockCommands {
    /// Record a stock delivery
    Receive {
        /// Product name
        name: String,

        /// Units received
        quantity: u32,
    },

    /// Record units sold
    Sell {
        /// Product name
        name: String,

        /// Units sold
        quantity: u32,
    },

    /// Set the stock level after a manual count
    Adjust {
        /// Product name
        name: String,

        /// New stock quantity
        quantity: u32,

        /// Reason for the adjustment (e.g. "wastage")
        #[arg(long, short)]
        reason: String,
    },

    /// Show current stock levels and total value
    Report,
}

pub fn run(cmd: StockCommands, shop: &Shop, output: &Output) -> Result<()> {
    match cmd {
        StockCommands::Receive { name, quantity } => {
            let mut store = shop.product_store()?;
            let product = store.receive_stock(&name, quantity)?;
            report_change(
                output,
                &product,
                &format!(
                    "{} units of {} added to stock. New total: {}",
                    quantity, product.name, product.quantity
                ),
            )?;
        }
        StockCommands::Sell { name, quantity } => {
            let mut store = shop.product_store()?;
            let product = store.record_sale(&name, quantity)?;
            report_change(
                output,
                &product,
                &format!(
                    "Sale recorded. {} units of {} removed from stock. Remaining: {}",
                    quantity, product.name, product.quantity
                ),
            )?;
        }
        StockCommands::Adjust {
            name,
            quantity,
            reason,
        } => {
            let mut store = shop.product_store()?;
            let product = store.adjust_stock(&name, quantity, &reason)?;
            report_change(
                output,
                &product,
                &format!("Stock level for {} set to {}", product.name, product.quantity),
            )?;
        }
        StockCommands::Report => {
            let store = shop.product_store()?;
            let products = store.list_all();
            let total_value = store.stock_value();

            if output.is_json() {
                output.data(&serde_json::json!({
                    "products": products,
                    "total_value": total_value,
                }))?;
            } else {
                output.text(&render::stock_report(&products, total_value, shop.config()));
            }
        }
    }

    Ok(())
}

fn report_change(output: &Output, product: &Product, message: &str) -> Result<()> {
    if output.is_json() {
        output.data(product)?;
    } else {
        output.success(message);
    }
    Ok(())
}
