//! Supplier CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use super::render;
use crate::domain::Supplier;
use crate::storage::Shop;

#[derive(Subcommand)]
pub enum SupplierCommands {
    /// Add a new supplier
    Add {
        /// Supplier name
        name: String,

        /// Contact information (email/phone)
        #[arg(long)]
        contact: String,

        /// Product category (e.g. "Coffee Beans & Tea")
        #[arg(long)]
        category: String,
    },

    /// Update supplier details (omitted fields keep their values)
    Update {
        /// Current supplier name
        name: String,

        /// New name
        #[arg(long = "name", value_name = "NEW_NAME")]
        new_name: Option<String>,

        /// New contact information
        #[arg(long)]
        contact: Option<String>,

        /// New product category
        #[arg(long)]
        category: Option<String>,
    },

    /// Remove a supplier
    Remove {
        /// Supplier name
        name: String,
    },

    /// Show one supplier
    Show {
        /// Supplier name
        name: String,
    },

    /// List all suppliers
    List,
}

pub fn run(cmd: SupplierCommands, shop: &Shop, output: &Output) -> Result<()> {
    match cmd {
        SupplierCommands::Add {
            name,
            contact,
            category,
        } => add_supplier(shop, output, &name, contact, category),
        SupplierCommands::Update {
            name,
            new_name,
            contact,
            category,
        } => update_supplier(shop, output, &name, new_name.as_deref(), contact, category),
        SupplierCommands::Remove { name } => remove_supplier(shop, output, &name),
        SupplierCommands::Show { name } => show_supplier(shop, output, &name),
        SupplierCommands::List => list_suppliers(shop, output),
    }
}

fn add_supplier(
    shop: &Shop,
    output: &Output,
    name: &str,
    contact: String,
    category: String,
) -> Result<()> {
    let mut store = shop.supplier_store()?;

    let supplier = Supplier::new(name, contact, category)?;
    store.add(supplier.clone())?;

    if output.is_json() {
        output.data(&supplier)?;
    } else {
        output.success(&format!("Added supplier: {}", supplier.name));
    }

    Ok(())
}

fn update_supplier(
    shop: &Shop,
    output: &Output,
    name: &str,
    new_name: Option<&str>,
    contact: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let mut store = shop.supplier_store()?;
    let current = store.get(name)?;

    let updated = Supplier::new(
        new_name.unwrap_or(&current.name),
        contact.unwrap_or_else(|| current.contact.clone()),
        category.unwrap_or_else(|| current.category.clone()),
    )?;
    store.update(name, updated.clone())?;

    if output.is_json() {
        output.data(&updated)?;
    } else {
        output.success(&format!("Updated supplier: {}", updated.name));
    }

    Ok(())
}

fn remove_supplier(shop: &Shop, output: &Output, name: &str) -> Result<()> {
    let mut store = shop.supplier_store()?;
    let removed = store.delete(name)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "name": name,
            "removed": removed,
        }))?;
    } else {
        output.success(&format!("Removed supplier: {}", name));
    }

    Ok(())
}

fn show_supplier(shop: &Shop, output: &Output, name: &str) -> Result<()> {
    let store = shop.supplier_store()?;
    let supplier = store.get(name)?;

    if output.is_json() {
        output.data(supplier)?;
    } else {
        output.text(&render::supplier_details(supplier));
    }

    Ok(())
}

fn list_suppliers(shop: &Shop, output: &Output) -> Result<()> {
    let store = shop.supplier_store()?;
    let suppliers = store.list_all();

    if output.is_json() {
        output.data(&suppliers)?;
    } else {
        output.text(&render::supplier_table(&suppliers));
    }

    Ok(())
}
