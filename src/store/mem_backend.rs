//! In-memory backend
//!
//! Keeps the encoded text of each collection, exactly as [`FsBackend`]
//! would write it, so tests can compare stored bytes without touching disk.
//!
//! [`FsBackend`]: super::FsBackend

use std::cell::{Cell, RefCell};
use std::path::Path;

use crate::error::{CafeError, Result};
use crate::model::{Customer, MenuItem};

use super::backend::StorageBackend;
use super::codec;

/// In-memory storage backend for tests and benches.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
#[derive(Debug, Default)]
pub struct MemBackend {
    menu: RefCell<Option<String>>,
    customers: RefCell<Option<String>>,
    menu_saves: Cell<u64>,
    customer_saves: Cell<u64>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that already holds `items` as its stored menu
    pub fn with_menu(items: &[MenuItem]) -> Result<Self> {
        let backend = Self::new();
        *backend.menu.borrow_mut() = Some(encode(items)?);
        Ok(backend)
    }

    /// Backend that already holds raw menu text
    pub fn with_menu_text(text: impl Into<String>) -> Self {
        let backend = Self::new();
        *backend.menu.borrow_mut() = Some(text.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Stored menu text, if any save happened
    pub fn menu_text(&self) -> Option<String> {
        self.menu.borrow().clone()
    }

    /// Stored roster text, if any save happened
    pub fn customer_text(&self) -> Option<String> {
        self.customers.borrow().clone()
    }

    /// Number of successful menu saves
    pub fn menu_saves(&self) -> u64 {
        self.menu_saves.get()
    }

    /// Number of successful roster saves
    pub fn customer_saves(&self) -> u64 {
        self.customer_saves.get()
    }

    fn check_writable(&self) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(CafeError::Storage("Simulated write error".to_string()));
        }
        Ok(())
    }
}

fn encode<T: serde::Serialize>(records: &[T]) -> Result<String> {
    let mut buf = Vec::new();
    codec::write_records(&mut buf, records)?;
    String::from_utf8(buf).map_err(|e| CafeError::Storage(e.to_string()))
}

impl StorageBackend for MemBackend {
    fn load_menu(&self) -> Result<Option<Vec<MenuItem>>> {
        match self.menu.borrow().as_deref() {
            Some(text) => Ok(Some(codec::read_records(
                Path::new("<memory:menu>"),
                text.as_bytes(),
            )?)),
            None => Ok(None),
        }
    }

    fn save_menu(&self, items: &[MenuItem]) -> Result<()> {
        self.check_writable()?;
        *self.menu.borrow_mut() = Some(encode(items)?);
        self.menu_saves.set(self.menu_saves.get() + 1);
        Ok(())
    }

    fn load_customers(&self) -> Result<Option<Vec<Customer>>> {
        match self.customers.borrow().as_deref() {
            Some(text) => Ok(Some(codec::read_records(
                Path::new("<memory:customers>"),
                text.as_bytes(),
            )?)),
            None => Ok(None),
        }
    }

    fn save_customers(&self, customers: &[Customer]) -> Result<()> {
        self.check_writable()?;
        *self.customers.borrow_mut() = Some(encode(customers)?);
        self.customer_saves.set(self.customer_saves.get() + 1);
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory backend".to_string()
    }
}
