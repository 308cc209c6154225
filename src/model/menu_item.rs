//! Menu item record

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ItemId, Price};

/// An item on the cafeteria menu
///
/// Field order is the persisted column order: `id,name,category,price,stock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(deserialize_with = "crate::model::trimmed_number")]
    pub id: ItemId,
    pub name: String,
    /// Free-text label used to group the menu ("Vegetarian", "Vegan", ...)
    pub category: String,
    pub price: Price,
    #[serde(deserialize_with = "crate::model::trimmed_number")]
    pub stock: u32,
}

impl MenuItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Price,
        stock: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            stock,
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} ({}) | ${} | Available: {}",
            self.id, self.name, self.category, self.price, self.stock
        )
    }
}
