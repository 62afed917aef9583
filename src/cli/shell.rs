//! Interactive menu shell
//!
//! The shell is a thin loop over the stores: it asks for a menu choice, asks
//! for the fields that operation needs, calls the store and prints the
//! outcome. Store errors are printed and the loop carries on.

use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::{bail, Result};

use super::login::login;
use super::prompt::{Prompt, PromptError, PromptResult};
use super::render;
use crate::domain::{Product, PurchaseOrder, Supplier};
use crate::storage::{RecordStore, Shop};

const BANNER: &str = "********** Cafe Stock Management System **********";

/// Runs the shell until the user exits or input ends
///
/// Both tables are loaded up front; a table that cannot be loaded ends the
/// session before the login prompt.
pub fn run<R: BufRead, W: Write>(shop: &Shop, input: R, output: W) -> Result<()> {
    let products = shop.product_store()?;
    let suppliers = shop.supplier_store()?;

    let mut prompt = Prompt::new(input, output);
    prompt.say(BANNER)?;

    let logged_in = match login(&mut prompt, shop.config()) {
        Ok(ok) => ok,
        Err(PromptError::Closed) => false,
        Err(e) => return Err(e.into()),
    };
    if !logged_in {
        bail!("Login failed");
    }

    let mut shell = Shell {
        shop,
        products,
        suppliers,
        prompt,
    };

    match shell.main_menu() {
        Ok(()) | Err(PromptError::Closed) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

struct Shell<'a, R, W> {
    shop: &'a Shop,
    products: RecordStore<Product>,
    suppliers: RecordStore<Supplier>,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Shell<'_, R, W> {
    fn main_menu(&mut self) -> PromptResult<()> {
        loop {
            self.menu(
                BANNER,
                &[
                    "Product Management",
                    "Supplier Management",
                    "Stock Management",
                    "Purchase Orders",
                    "Exit System",
                ],
            )?;

            match self.choice()?.as_str() {
                "1" => self.product_menu()?,
                "2" => self.supplier_menu()?,
                "3" => self.stock_menu()?,
                "4" => self.order_menu()?,
                "5" => {
                    self.prompt.say("Logging out...")?;
                    return Ok(());
                }
                _ => self.invalid_choice()?,
            }
        }
    }

    // ---------------------------------------------------------------------
    // Products
    // ---------------------------------------------------------------------

    fn product_menu(&mut self) -> PromptResult<()> {
        loop {
            self.menu(
                "=== Cafe Product Management ===",
                &[
                    "Add new cafe product",
                    "Update product details",
                    "Remove product from inventory",
                    "Search product information",
                    "View all products",
                    "Return to main menu",
                ],
            )?;

            match self.choice()?.as_str() {
                "1" => self.add_product()?,
                "2" => self.update_product()?,
                "3" => self.remove_product()?,
                "4" => self.search_product()?,
                "5" => {
                    let table = render::product_table(self.products.records(), self.shop.config());
                    self.prompt.say(&table)?;
                }
                "6" => return Ok(()),
                _ => self.invalid_choice()?,
            }
        }
    }

    fn add_product(&mut self) -> PromptResult<()> {
        let name = self.prompt.required("Enter product name (e.g. 'Latte Mix'): ")?;
        let price = self.prompt.price("Enter product price per unit (e.g. 3.50): ")?;
        let quantity: u32 = self.prompt.number("Enter initial stock quantity: ")?;

        let product = match Product::new(&name, price, quantity) {
            Ok(product) => product,
            Err(e) => return self.report(e),
        };
        let added = product.name.clone();

        match self.products.add(product) {
            Ok(()) => self.prompt.say(&format!("{} added to inventory.", added)),
            Err(e) => self.report(e),
        }
    }

    fn update_product(&mut self) -> PromptResult<()> {
        let name = self.prompt.required("Enter product name to update: ")?;
        let current = match self.products.get(&name) {
            Ok(product) => product.clone(),
            Err(e) => return self.report(e),
        };

        self.prompt.say(&format!("Updating {} (leave blank to keep current value):", current.name))?;
        let new_name = self.prompt.line(&format!("Name [{}]: ", current.name))?;
        let price = self
            .prompt
            .optional_price(&format!("Price [{:.2}]: ", current.price))?;
        let quantity = self
            .prompt
            .optional_number(&format!("Quantity [{}]: ", current.quantity))?;

        let new_name = if new_name.is_empty() { current.name.clone() } else { new_name };
        let updated = match Product::new(
            &new_name,
            price.unwrap_or(current.price),
            quantity.unwrap_or(current.quantity),
        ) {
            Ok(product) => product,
            Err(e) => return self.report(e),
        };

        match self.products.update(&name, updated) {
            Ok(()) => self.prompt.say(&format!("{} updated successfully!", current.name)),
            Err(e) => self.report(e),
        }
    }

    fn remove_product(&mut self) -> PromptResult<()> {
        let name = self.prompt.required("Enter product name to remove from inventory: ")?;
        if !self
            .prompt
            .confirm(&format!("Are you sure you want to remove {}? (y/n): ", name))?
        {
            return self.prompt.say("Nothing removed.");
        }

        match self.products.delete(&name) {
            Ok(_) => self.prompt.say(&format!("{} removed from inventory.", name)),
            Err(e) => self.report(e),
        }
    }

    fn search_product(&mut self) -> PromptResult<()> {
        let name = self.prompt.required("Enter product name to search: ")?;
        let details = match self.products.get(&name) {
            Ok(product) => render::product_details(product, self.shop.config()),
            Err(e) => return self.report(e),
        };
        self.prompt.say(&details)
    }

    // ---------------------------------------------------------------------
    // Suppliers
    // ---------------------------------------------------------------------

    fn supplier_menu(&mut self) -> PromptResult<()> {
        loop {
            self.menu(
                "=== Cafe Supplier Management ===",
                &[
                    "Add new supplier",
                    "Update supplier details",
                    "Remove supplier",
                    "Search supplier information",
                    "View all suppliers",
                    "Return to main menu",
                ],
            )?;

            match self.choice()?.as_str() {
                "1" => self.add_supplier()?,
                "2" => self.update_supplier()?,
                "3" => self.remove_supplier()?,
                "4" => self.search_supplier()?,
                "5" => {
                    let table = render::supplier_table(self.suppliers.records());
                    self.prompt.say(&table)?;
                }
                "6" => return Ok(()),
                _ => self.invalid_choice()?,
            }
        }
    }

    fn add_supplier(&mut self) -> PromptResult<()> {
        let name = self.prompt.required("Enter supplier name: ")?;
        let contact = self.prompt.line("Enter contact information (email/phone): ")?;
        let category = self
            .prompt
            .line("Enter product category (e.g. 'Coffee Beans & Tea'): ")?;

        let supplier = match Supplier::new(&name, contact, category) {
            Ok(supplier) => supplier,
            Err(e) => return self.report(e),
        };
        let added = supplier.name.clone();

        match self.suppliers.add(supplier) {
            Ok(()) => self.prompt.say(&format!("{} added to suppliers.", added)),
            Err(e) => self.report(e),
        }
    }

    fn update_supplier(&mut self) -> PromptResult<()> {
        let name = self.prompt.required("Enter supplier name to update: ")?;
        let current = match self.suppliers.get(&name) {
            Ok(supplier) => supplier.clone(),
            Err(e) => return self.report(e),
        };

        self.prompt.say(&format!("Updating {} (leave blank to keep current value):", current.name))?;
        let new_name = self.prompt.line(&format!("Name [{}]: ", current.name))?;
        let contact = self.prompt.line(&format!("Contact [{}]: ", current.contact))?;
        let category = self.prompt.line(&format!("Category [{}]: ", current.category))?;

        let keep = |answer: String, existing: &str| {
            if answer.is_empty() {
                existing.to_string()
            } else {
                answer
            }
        };
        let updated = match Supplier::new(
            &keep(new_name, &current.name),
            keep(contact, &current.contact),
            keep(category, &current.category),
        ) {
            Ok(supplier) => supplier,
            Err(e) => return self.report(e),
        };

        match self.suppliers.update(&name, updated) {
            Ok(()) => self.prompt.say("Supplier updated successfully!"),
            Err(e) => self.report(e),
        }
    }

    fn remove_supplier(&mut self) -> PromptResult<()> {
        let name = self.prompt.required("Enter supplier name to remove: ")?;
        if !self
            .prompt
            .confirm(&format!("Are you sure you want to remove {}? (y/n): ", name))?
        {
            return self.prompt.say("Nothing removed.");
        }

        match self.suppliers.delete(&name) {
            Ok(_) => self.prompt.say(&format!("{} removed from suppliers.", name)),
            Err(e) => self.report(e),
        }
    }

    fn search_supplier(&mut self) -> PromptResult<()> {
        let name = self.prompt.required("Enter supplier name to search: ")?;
        let details = match self.suppliers.get(&name) {
            Ok(supplier) => render::supplier_details(supplier),
            Err(e) => return self.report(e),
        };
        self.prompt.say(&details)
    }

    // ---------------------------------------------------------------------
    // Stock
    // ---------------------------------------------------------------------

    fn stock_menu(&mut self) -> PromptResult<()> {
        loop {
            self.menu(
                "=== Cafe Stock Management ===",
                &[
                    "Receive new stock delivery",
                    "Record daily sales",
                    "View current stock report",
                    "Adjust stock levels (manual correction)",
                    "Return to main menu",
                ],
            )?;

            match self.choice()?.as_str() {
                "1" => self.receive_stock()?,
                "2" => self.record_sale()?,
                "3" => {
                    let report = render::stock_report(
                        self.products.records(),
                        self.products.stock_value(),
                        self.shop.config(),
                    );
                    self.prompt.say(&report)?;
                }
                "4" => self.adjust_stock()?,
                "5" => return Ok(()),
                _ => self.invalid_choice()?,
            }
        }
    }

    /// Looks up a product and shows its stock; `None` if it does not exist
    fn stocked_product(&mut self, label: &str) -> PromptResult<Option<String>> {
        let name = self.prompt.required(label)?;
        let current = match self.products.get(&name) {
            Ok(product) => product.quantity,
            Err(e) => {
                self.report(e)?;
                return Ok(None);
            }
        };
        self.prompt.say(&format!("Current stock: {}", current))?;
        Ok(Some(name))
    }

    fn receive_stock(&mut self) -> PromptResult<()> {
        let Some(name) = self.stocked_product("Enter product name: ")? else {
            return Ok(());
        };
        let quantity: u32 = self.prompt.number("Enter quantity received: ")?;

        match self.products.receive_stock(&name, quantity) {
            Ok(product) => self.prompt.say(&format!(
                "{} units of {} added to stock. New total: {}",
                quantity, product.name, product.quantity
            )),
            Err(e) => self.report(e),
        }
    }

    fn record_sale(&mut self) -> PromptResult<()> {
        let Some(name) = self.stocked_product("Enter product name sold: ")? else {
            return Ok(());
        };
        let quantity: u32 = self.prompt.number("Enter quantity sold: ")?;

        match self.products.record_sale(&name, quantity) {
            Ok(product) => self.prompt.say(&format!(
                "Sale recorded. {} units of {} removed from stock. Remaining: {}",
                quantity, product.name, product.quantity
            )),
            Err(e) => self.report(e),
        }
    }

    fn adjust_stock(&mut self) -> PromptResult<()> {
        let Some(name) = self.stocked_product("Enter product name: ")? else {
            return Ok(());
        };
        let quantity: u32 = self.prompt.number("Enter new stock quantity: ")?;
        let reason = self
            .prompt
            .line("Enter reason for adjustment (e.g. 'wastage', 'inventory correction'): ")?;

        match self.products.adjust_stock(&name, quantity, &reason) {
            Ok(product) => self.prompt.say(&format!(
                "Stock level for {} updated to {}",
                product.name, product.quantity
            )),
            Err(e) => self.report(e),
        }
    }

    // ---------------------------------------------------------------------
    // Purchase orders
    // ---------------------------------------------------------------------

    fn order_menu(&mut self) -> PromptResult<()> {
        loop {
            self.menu(
                "=== Cafe Purchase Orders ===",
                &[
                    "Generate orders for low stock items",
                    "Create custom purchase order",
                    "View current stock levels",
                    "Return to main menu",
                ],
            )?;

            match self.choice()?.as_str() {
                "1" => self.low_stock_orders()?,
                "2" => self.custom_order()?,
                "3" => {
                    let levels: Vec<String> = self
                        .products
                        .records()
                        .iter()
                        .map(|p| format!("{}: {} units", p.name, p.quantity))
                        .collect();
                    if levels.is_empty() {
                        self.prompt.say("No products")?;
                    } else {
                        self.prompt.say(&levels.join("\n"))?;
                    }
                }
                "4" => return Ok(()),
                _ => self.invalid_choice()?,
            }
        }
    }

    fn low_stock_orders(&mut self) -> PromptResult<()> {
        let default = self.shop.config().low_stock_threshold;
        let threshold: u32 = self
            .prompt
            .number_or(&format!("Enter low stock threshold (default {}): ", default), default)?;

        let low = self.products.low_stock(threshold);
        self.prompt.say(&render::low_stock_table(&low, threshold))?;
        if low.is_empty() {
            return Ok(());
        }

        if !self
            .prompt
            .confirm("Generate purchase orders for these items? (y/n): ")?
        {
            return Ok(());
        }

        for product in &low {
            let suggested = PurchaseOrder::suggested_quantity(threshold, product.quantity);
            let quantity: u32 = self.prompt.number_or(
                &format!("Enter order quantity for {} (suggested {}): ", product.name, suggested),
                suggested,
            )?;
            self.print_order(product, quantity)?;
        }

        Ok(())
    }

    fn custom_order(&mut self) -> PromptResult<()> {
        let Some(name) = self.stocked_product("Enter the product name: ")? else {
            return Ok(());
        };
        let quantity: u32 = self.prompt.number("Enter the quantity to order: ")?;

        let product = match self.products.get(&name) {
            Ok(product) => product.clone(),
            Err(e) => return self.report(e),
        };
        self.print_order(&product, quantity)
    }

    fn print_order(&mut self, product: &Product, quantity: u32) -> PromptResult<()> {
        match PurchaseOrder::new(product, quantity) {
            Ok(order) => self.prompt.say(&order.to_string()),
            Err(e) => self.report(e),
        }
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    fn menu(&mut self, title: &str, options: &[&str]) -> PromptResult<()> {
        self.prompt.say(&format!("\n{}", title))?;
        for (i, option) in options.iter().enumerate() {
            self.prompt.say(&format!("{}. {}", i + 1, option))?;
        }
        Ok(())
    }

    fn choice(&mut self) -> PromptResult<String> {
        self.prompt.line("\nEnter your choice: ")
    }

    fn invalid_choice(&mut self) -> PromptResult<()> {
        self.prompt.say("Invalid choice. Please try again.")
    }

    fn report(&mut self, err: impl Display) -> PromptResult<()> {
        self.prompt.say(&format!("Error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn shop_with_products(rows: &str) -> (TempDir, Shop) {
        let dir = TempDir::new().unwrap();
        let shop = Shop::init(dir.path()).unwrap();
        fs::write(
            dir.path().join("products.csv"),
            format!("Name,Price,Quantity\n{}", rows),
        )
        .unwrap();
        (dir, shop)
    }

    fn session(shop: &Shop, script: &str) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run(shop, format!("admin\ntest\n{}", script).as_bytes(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn products_file(dir: &TempDir) -> String {
        fs::read_to_string(dir.path().join("products.csv")).unwrap()
    }

    #[test]
    fn add_product_and_list() {
        let (dir, shop) = shop_with_products("");

        let (result, out) = session(&shop, "1\n1\nLatte Mix\n3.50\n12\n5\n6\n5\n");
        result.unwrap();

        assert!(out.contains("Latte Mix added to inventory."));
        assert!(out.contains("Logging out..."));
        assert_eq!(products_file(&dir), "Name,Price,Quantity\nLatte Mix,3.5,12\n");
    }

    #[test]
    fn non_numeric_quantity_is_reprompted() {
        let (dir, shop) = shop_with_products("");

        let (result, out) = session(&shop, "1\n1\nScone\n2.25\nlots\n6\n6\n5\n");
        result.unwrap();

        assert!(out.contains("'lots' is not a valid whole number."));
        assert!(products_file(&dir).contains("Scone,2.25,6"));
    }

    #[test]
    fn duplicate_product_is_reported() {
        let (_dir, shop) = shop_with_products("Espresso,2.50,8\n");

        let (result, out) = session(&shop, "1\n1\nespresso\n1\n1\n6\n5\n");
        result.unwrap();

        assert!(out.contains("Error: Product already exists: Espresso"));
    }

    #[test]
    fn update_keeps_blank_fields() {
        let (dir, shop) = shop_with_products("Tea,1.50,10\n");

        let (result, _) = session(&shop, "1\n2\ntea\nGreen Tea\n\n\n6\n5\n");
        result.unwrap();

        assert_eq!(products_file(&dir), "Name,Price,Quantity\nGreen Tea,1.5,10\n");
    }

    #[test]
    fn remove_requires_confirmation() {
        let (dir, shop) = shop_with_products("Espresso,2.50,8\n");

        let (result, out) = session(&shop, "1\n3\nEspresso\nn\n1\n3\nEspresso\ny\n6\n5\n");
        result.unwrap();

        assert!(out.contains("Nothing removed."));
        assert!(out.contains("Espresso removed from inventory."));
        assert_eq!(products_file(&dir), "Name,Price,Quantity\n");
    }

    #[test]
    fn oversized_sale_is_rejected() {
        let (dir, shop) = shop_with_products("Espresso,2.50,8\n");

        let (result, out) = session(&shop, "3\n2\nEspresso\n9\n5\n5\n");
        result.unwrap();

        assert!(out.contains("Current stock: 8"));
        assert!(out.contains("Not enough stock of Espresso"));
        assert!(products_file(&dir).contains("Espresso,2.5,8"));
    }

    #[test]
    fn receive_then_adjust() {
        let (dir, shop) = shop_with_products("Espresso,2.50,8\n");

        let (result, out) = session(&shop, "3\n1\nEspresso\n4\n3\n4\nespresso\n3\nwastage\n5\n5\n");
        result.unwrap();

        assert!(out.contains("New total: 12"));
        assert!(out.contains("Total stock value: £30.00"));
        assert!(out.contains("Stock level for Espresso updated to 3"));
        assert!(products_file(&dir).contains("Espresso,2.5,3"));
    }

    #[test]
    fn unknown_product_is_reported() {
        let (_dir, shop) = shop_with_products("");

        let (result, out) = session(&shop, "3\n1\nMocha\n5\n5\n");
        result.unwrap();

        assert!(out.contains("Error: Product not found: Mocha"));
    }

    #[test]
    fn low_stock_orders_use_suggestions() {
        let (_dir, shop) = shop_with_products("Espresso,2.50,8\nMilk,1.00,40\n");

        let (result, out) = session(&shop, "4\n1\n\ny\n\n4\n5\n");
        result.unwrap();

        assert!(out.contains("Products below 10 units:"));
        assert!(out.contains("Product:  Espresso"));
        assert!(out.contains("Quantity: 12"));
        assert!(!out.contains("Product:  Milk"));
    }

    #[test]
    fn supplier_lifecycle() {
        let (dir, shop) = shop_with_products("");

        let script = "2\n1\nBean Co\norders@bean.co\nCoffee Beans & Tea\n4\nbean co\n6\n5\n";
        let (result, out) = session(&shop, script);
        result.unwrap();

        assert!(out.contains("Bean Co added to suppliers."));
        assert!(out.contains("Product Category: Coffee Beans & Tea"));
        assert_eq!(
            fs::read_to_string(dir.path().join("suppliers.csv")).unwrap(),
            "Name,ContactInfo,ProductCategory\nBean Co,orders@bean.co,Coffee Beans & Tea\n"
        );
    }

    #[test]
    fn invalid_choice_is_reported() {
        let (_dir, shop) = shop_with_products("");

        let (result, out) = session(&shop, "9\n5\n");
        result.unwrap();

        assert!(out.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (_dir, shop) = shop_with_products("");

        let (result, _) = session(&shop, "1\n");
        assert!(result.is_ok());
    }

    #[test]
    fn failed_login_is_an_error() {
        let (_dir, shop) = shop_with_products("");
        let mut out = Vec::new();

        let result = run(&shop, "admin\nx\nadmin\ny\nadmin\nz\n".as_bytes(), &mut out);
        assert!(result.is_err());
    }

    #[test]
    fn missing_table_stops_before_login() {
        let (dir, shop) = shop_with_products("");
        fs::remove_file(dir.path().join("suppliers.csv")).unwrap();
        let mut out = Vec::new();

        let result = run(&shop, "admin\ntest\n".as_bytes(), &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
