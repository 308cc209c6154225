//! Storage backend abstraction

use crate::error::Result;
use crate::model::{Customer, MenuItem};

/// Raw persistence of the two collections.
///
/// Backends only know how to move whole collections in and out of storage;
/// first-run policy (sample menu, empty roster) belongs to
/// [`RecordStore`](super::RecordStore).
pub trait StorageBackend {
    /// Load every menu record, in stored order.
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load_menu(&self) -> Result<Option<Vec<MenuItem>>>;

    /// Replace the stored menu with `items`.
    /// Implementations must not leave a half-written collection behind.
    fn save_menu(&self, items: &[MenuItem]) -> Result<()>;

    /// Load every customer record, in stored order.
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn load_customers(&self) -> Result<Option<Vec<Customer>>>;

    /// Replace the stored roster with `customers`.
    fn save_customers(&self, customers: &[Customer]) -> Result<()>;

    /// Human-readable location, for log lines
    fn describe(&self) -> String;
}

impl<T: StorageBackend + ?Sized> StorageBackend for &T {
    fn load_menu(&self) -> Result<Option<Vec<MenuItem>>> {
        (**self).load_menu()
    }

    fn save_menu(&self, items: &[MenuItem]) -> Result<()> {
        (**self).save_menu(items)
    }

    fn load_customers(&self) -> Result<Option<Vec<Customer>>> {
        (**self).load_customers()
    }

    fn save_customers(&self, customers: &[Customer]) -> Result<()> {
        (**self).save_customers(customers)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
