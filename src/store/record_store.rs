//! Record Store
//!
//! Owns the menu and customer tables and writes them back through a
//! [`StorageBackend`].

use crate::config::Config;
use crate::error::Result;
use crate::model::{Customer, MenuItem};

use super::backend::StorageBackend;
use super::fs_backend::FsBackend;
use super::sample::sample_menu;
use super::table::Table;

/// In-memory collections plus the backend they persist to
///
/// ## Revisions
/// Each collection carries a revision counter bumped on every successful
/// save made through the store. A freshly opened store starts both at 0.
pub struct RecordStore<B: StorageBackend> {
    backend: B,

    /// Menu items in catalog order
    menu: Table<MenuItem>,

    /// Customers in roster order
    customers: Table<Customer>,

    menu_revision: u64,
    customer_revision: u64,

    /// What `open` found missing, for first-run notices
    startup: StartupReport,
}

/// Which collections were absent when the store was opened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartupReport {
    /// No menu was stored; a seed menu was created and saved
    pub menu_created: bool,
    /// The seed menu was the sample menu (not an empty one)
    pub sample_menu_seeded: bool,
    /// No roster was stored; starting empty
    pub customers_missing: bool,
}

impl RecordStore<FsBackend> {
    /// Open the file-backed store described by `config`
    pub fn open_with_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::open(FsBackend::from_config(config), config.seed_sample_menu)
    }
}

impl<B: StorageBackend> RecordStore<B> {
    /// Load both collections from `backend`.
    ///
    /// On startup:
    /// 1. Load the menu; if none is stored, seed it (sample items when
    ///    `seed_sample_menu`, otherwise empty) and save it right away
    /// 2. Load the roster; if none is stored, start empty without saving
    pub fn open(backend: B, seed_sample_menu: bool) -> Result<Self> {
        let mut store = Self {
            backend,
            menu: Table::new(),
            customers: Table::new(),
            menu_revision: 0,
            customer_revision: 0,
            startup: StartupReport::default(),
        };

        match store.backend.load_menu()? {
            Some(items) => {
                let (menu, skipped) = Table::from_rows(items);
                for id in skipped {
                    tracing::warn!(id, "Skipping menu record with duplicate id");
                }
                tracing::info!(
                    items = menu.len(),
                    "Loaded menu from {}",
                    store.backend.describe()
                );
                store.menu = menu;
            }
            None => {
                tracing::info!("Menu file not found, creating a new one");
                let seed = if seed_sample_menu {
                    sample_menu()
                } else {
                    Vec::new()
                };
                let (menu, _) = Table::from_rows(seed);
                store.menu = menu;
                store.backend.save_menu(store.menu.as_slice())?;
                store.startup.menu_created = true;
                store.startup.sample_menu_seeded = seed_sample_menu;
                tracing::info!(items = store.menu.len(), "Seeded menu saved");
            }
        }

        match store.backend.load_customers()? {
            Some(customers) => {
                let (table, skipped) = Table::from_rows(customers);
                for id in skipped {
                    tracing::warn!(id, "Skipping customer record with duplicate id");
                }
                tracing::info!(customers = table.len(), "Loaded customers");
                store.customers = table;
            }
            None => {
                tracing::info!("Customer file not found, starting with an empty roster");
                store.startup.customers_missing = true;
            }
        }

        Ok(store)
    }

    // =========================================================================
    // Collections
    // =========================================================================

    pub fn menu(&self) -> &Table<MenuItem> {
        &self.menu
    }

    /// Field updates go through the catalog and order sessions, which keep
    /// ids fixed
    pub(crate) fn menu_mut(&mut self) -> &mut Table<MenuItem> {
        &mut self.menu
    }

    pub fn customers(&self) -> &Table<Customer> {
        &self.customers
    }

    pub(crate) fn customers_mut(&mut self) -> &mut Table<Customer> {
        &mut self.customers
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Rewrite the whole menu
    pub fn save_menu(&mut self) -> Result<()> {
        self.backend.save_menu(self.menu.as_slice())?;
        self.menu_revision += 1;
        tracing::debug!(
            revision = self.menu_revision,
            items = self.menu.len(),
            "Menu saved"
        );
        Ok(())
    }

    /// Rewrite the whole roster
    pub fn save_customers(&mut self) -> Result<()> {
        self.backend.save_customers(self.customers.as_slice())?;
        self.customer_revision += 1;
        tracing::debug!(
            revision = self.customer_revision,
            customers = self.customers.len(),
            "Customers saved"
        );
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    pub fn menu_revision(&self) -> u64 {
        self.menu_revision
    }

    pub fn customer_revision(&self) -> u64 {
        self.customer_revision
    }

    pub fn startup(&self) -> StartupReport {
        self.startup
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
