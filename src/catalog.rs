//! Catalog Module
//!
//! Add, update and remove menu items and customers, and render the menu
//! grouped by category.
//!
//! ## Rules
//! - Ids are unique per collection; adding a taken id is rejected
//! - Update overwrites every field except the id
//! - Every successful mutation is followed by a full save of that collection
//! - A missing id changes nothing and saves nothing

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::error::{CafeError, Result};
use crate::model::{Customer, CustomerId, ItemId, MenuItem, Price, ORDER_SENTINEL};
use crate::store::{RecordStore, StorageBackend};

/// New values for every editable field of a menu item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemUpdate {
    pub name: String,
    pub category: String,
    pub price: Price,
    pub stock: u32,
}

/// New values for every editable field of a customer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub name: String,
    pub contact: String,
}

/// Menu items sharing one category label, in catalog order
#[derive(Debug)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<&'a MenuItem>,
}

/// CRUD view over a [`RecordStore`]
pub struct Catalog<'a, B: StorageBackend> {
    store: &'a mut RecordStore<B>,
}

impl<'a, B: StorageBackend> Catalog<'a, B> {
    pub fn new(store: &'a mut RecordStore<B>) -> Self {
        Self { store }
    }

    // =========================================================================
    // Menu Items
    // =========================================================================

    /// Append a new menu item and save the menu
    pub fn add_menu_item(&mut self, item: MenuItem) -> Result<()> {
        if item.id == ORDER_SENTINEL {
            return Err(CafeError::InvalidInput(format!(
                "ID {} is reserved for ending an order",
                ORDER_SENTINEL
            )));
        }
        let id = item.id;
        self.store
            .menu_mut()
            .insert(item)
            .map_err(|_| CafeError::DuplicateMenuItem(id))?;
        self.store.save_menu()?;
        tracing::info!(id, "Menu item added");
        Ok(())
    }

    /// Overwrite name, category, price and stock of an existing item
    pub fn update_menu_item(&mut self, id: ItemId, update: MenuItemUpdate) -> Result<()> {
        let item = self
            .store
            .menu_mut()
            .get_mut(id)
            .ok_or(CafeError::MenuItemNotFound(id))?;

        item.name = update.name;
        item.category = update.category;
        item.price = update.price;
        item.stock = update.stock;

        self.store.save_menu()?;
        tracing::info!(id, "Menu item updated");
        Ok(())
    }

    /// Remove an item and save the menu
    pub fn remove_menu_item(&mut self, id: ItemId) -> Result<MenuItem> {
        let removed = self
            .store
            .menu_mut()
            .remove(id)
            .ok_or(CafeError::MenuItemNotFound(id))?;
        self.store.save_menu()?;
        tracing::info!(id, "Menu item removed");
        Ok(removed)
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Append a new customer and save the roster
    pub fn add_customer(&mut self, customer: Customer) -> Result<()> {
        let id = customer.id;
        self.store
            .customers_mut()
            .insert(customer)
            .map_err(|_| CafeError::DuplicateCustomer(id))?;
        self.store.save_customers()?;
        tracing::info!(id, "Customer added");
        Ok(())
    }

    /// Overwrite name and contact of an existing customer
    pub fn update_customer(&mut self, id: CustomerId, update: CustomerUpdate) -> Result<()> {
        let customer = self
            .store
            .customers_mut()
            .get_mut(id)
            .ok_or(CafeError::CustomerNotFound(id))?;

        customer.name = update.name;
        customer.contact = update.contact;

        self.store.save_customers()?;
        tracing::info!(id, "Customer updated");
        Ok(())
    }

    /// Remove a customer and save the roster
    pub fn remove_customer(&mut self, id: CustomerId) -> Result<Customer> {
        let removed = self
            .store
            .customers_mut()
            .remove(id)
            .ok_or(CafeError::CustomerNotFound(id))?;
        self.store.save_customers()?;
        tracing::info!(id, "Customer removed");
        Ok(removed)
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Menu grouped by category: categories sorted, items in catalog order
    pub fn menu_by_category(&self) -> Vec<CategoryGroup<'_>> {
        group_by_category(self.store.menu().iter())
    }

    /// The full menu listing shown to the operator
    pub fn render_menu(&self) -> String {
        render_menu(self.store.menu().iter())
    }
}

/// Group items by category label, labels sorted lexicographically
pub fn group_by_category<'a, I>(items: I) -> Vec<CategoryGroup<'a>>
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let mut groups: BTreeMap<&'a str, Vec<&'a MenuItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.category.as_str()).or_default().push(item);
    }
    groups
        .into_iter()
        .map(|(category, items)| CategoryGroup { category, items })
        .collect()
}

/// Render the menu listing
///
/// ```text
/// === CampusBites Cafeteria Menu ===
///
/// Category: Vegan
/// ID: 5 | Vegan Buddha Bowl (Vegan) | $10.99 | Available: 15
/// ```
pub fn render_menu<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let mut out = String::from("\n=== CampusBites Cafeteria Menu ===\n");
    for group in group_by_category(items) {
        let _ = writeln!(out, "\nCategory: {}", group.category);
        for item in group.items {
            let _ = writeln!(out, "{}", item);
        }
    }
    out.push('\n');
    out
}
