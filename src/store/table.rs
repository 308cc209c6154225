//! Keyed table
//!
//! Insertion-ordered rows with an id → position index.

use std::collections::HashMap;

use crate::model::{Customer, MenuItem};

/// A record with an integer identifier
pub trait Keyed {
    fn key(&self) -> i64;
}

impl Keyed for MenuItem {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Keyed for Customer {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Rows in catalog order, unique by id
///
/// Iteration follows insertion order; lookups go through the index.
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: Vec<T>,
    index: HashMap<i64, usize>,
}

impl<T: Keyed> Table<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a table from loaded rows.
    ///
    /// The first row for an id wins; ids of dropped rows are returned.
    pub fn from_rows(rows: Vec<T>) -> (Self, Vec<i64>) {
        let mut table = Self::new();
        let mut skipped = Vec::new();
        for row in rows {
            if let Err(dup) = table.insert(row) {
                skipped.push(dup.key());
            }
        }
        (table, skipped)
    }

    /// Append a row. Gives the row back if its id is taken.
    pub fn insert(&mut self, row: T) -> Result<(), T> {
        let key = row.key();
        if self.index.contains_key(&key) {
            return Err(row);
        }
        self.index.insert(key, self.rows.len());
        self.rows.push(row);
        Ok(())
    }

    pub fn get(&self, key: i64) -> Option<&T> {
        self.index.get(&key).map(|&pos| &self.rows[pos])
    }

    /// Mutable access for field updates. Callers must not change the id.
    pub(crate) fn get_mut(&mut self, key: i64) -> Option<&mut T> {
        match self.index.get(&key) {
            Some(&pos) => self.rows.get_mut(pos),
            None => None,
        }
    }

    pub fn contains(&self, key: i64) -> bool {
        self.index.contains_key(&key)
    }

    /// Remove a row, keeping the order of the others
    pub fn remove(&mut self, key: i64) -> Option<T> {
        let pos = self.index.remove(&key)?;
        let row = self.rows.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(row)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Keyed> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Table<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
