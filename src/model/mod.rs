//! Model Module
//!
//! Plain records shared by the store, the catalog and the order engine.
//!
//! ## Records
//! - [`MenuItem`]: something the cafeteria sells, with price and stock
//! - [`Customer`]: a roster entry (orders are anonymous and never link here)
//! - [`Price`]: non-negative fixed-point amount, always shown with two decimals

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

mod customer;
mod menu_item;
mod price;

pub use customer::Customer;
pub use menu_item::MenuItem;
pub use price::Price;

/// Identifier of a menu item
pub type ItemId = i64;

/// Identifier of a customer
pub type CustomerId = i64;

/// Item id that ends an order session
pub const ORDER_SENTINEL: ItemId = -1;

/// Parse a numeric field, ignoring surrounding whitespace
pub(crate) fn trimmed_number<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}
