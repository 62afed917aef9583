//! Product CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use super::render;
use crate::domain::Product;
use crate::storage::Shop;

#[derive(Subcommand)]
pub enum ProductCommands {
    /// Add a new product
    Add {
        /// Product name (e.g. "Latte Mix")
        name: String,

        /// Price per unit
        #[arg(long)]
        price: f64,

        /// Initial stock quantity
        #[arg(long, short)]
        quantity: u32,
    },

    /// Update product details (omitted fields keep their values)
    Update {
        /// Current product name
        name: String,

        /// New name
        #[arg(long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,

        /// New price per unit
        #[arg(long)]
        price: Option<f64>,

        /// New stock quantity
        #[arg(long, short)]
        quantity: Option<u32>,
    },

    /// Remove a product from the inventory
    Remove {
        /// Product name
        name: String,
    },

    /// Show one product
    Show {
        /// Product name
        name: String,
    },

    /// List all products
    List,
}

pub fn run(cmd: ProductCommands, shop: &Shop, output: &Output) -> Result<()> {
    match cmd {
        ProductCommands::Add {
            name,
            price,
            quantity,
        } => add_product(shop, output, &name, price, quantity),
        ProductCommands::Update {
            name,
            new_name,
            price,
            quantity,
        } => update_product(shop, output, &name, new_name.as_deref(), price, quantity),
        ProductCommands::Remove { name } => remove_product(shop, output, &name),
        ProductCommands::Show { name } => show_product(shop, output, &name),
        ProductCommands::List => list_products(shop, output),
    }
}

fn add_product(shop: &Shop, output: &Output, name: &str, price: f64, quantity: u32) -> Result<()> {
    let mut store = shop.product_store()?;

    let product = Product::new(name, price, quantity)?;
    store.add(product.clone())?;

    if output.is_json() {
        output.data(&product)?;
    } else {
        output.success(&format!(
            "Added product: {} ({} x {})",
            product.name,
            product.quantity,
            shop.config().money(product.price)
        ));
    }

    Ok(())
}

fn update_product(
    shop: &Shop,
    output: &Output,
    name: &str,
    new_name: Option<&str>,
    price: Option<f64>,
    quantity: Option<u32>,
) -> Result<()> {
    let mut store = shop.product_store()?;
    let current = store.get(name)?;

    let updated = Product::new(
        new_name.unwrap_or(&current.name),
        price.unwrap_or(current.price),
        quantity.unwrap_or(current.quantity),
    )?;
    store.update(name, updated.clone())?;

    if output.is_json() {
        output.data(&updated)?;
    } else {
        output.success(&format!("Updated product: {}", updated.name));
    }

    Ok(())
}

fn remove_product(shop: &Shop, output: &Output, name: &str) -> Result<()> {
    let mut store = shop.product_store()?;
    let removed = store.delete(name)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "name": name,
            "removed": removed,
        }))?;
    } else {
        output.success(&format!("Removed product: {}", name));
    }

    Ok(())
}

fn show_product(shop: &Shop, output: &Output, name: &str) -> Result<()> {
    let store = shop.product_store()?;
    let product = store.get(name)?;

    if output.is_json() {
        output.data(product)?;
    } else {
        output.text(&render::product_details(product, shop.config()));
    }

    Ok(())
}

fn list_products(shop: &Shop, output: &Output) -> Result<()> {
    let store = shop.product_store()?;
    let products = store.list_all();

    if output.is_json() {
        output.data(&products)?;
    } else {
        output.text(&render::product_table(&products, shop.config()));
    }

    Ok(())
}
