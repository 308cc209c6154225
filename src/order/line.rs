//! Order lines and per-line outcomes

use std::fmt;

use crate::model::{ItemId, Price};

/// A fulfilled line: the item as it was when ordered, plus the quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl OrderLine {
    /// `unit_price × quantity`
    ///
    /// Fulfilled lines were checked for overflow when accepted, so the
    /// saturating fallback is never reached for them.
    pub fn subtotal(&self) -> Price {
        self.unit_price
            .checked_times(self.quantity)
            .unwrap_or(Price::MAX)
    }
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} @ ${} each",
            self.name, self.quantity, self.unit_price
        )
    }
}

/// What happened to one requested line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Stock was decremented and the line joins the receipt
    Fulfilled(OrderLine),

    /// No menu item has this id
    NotFound { item_id: ItemId },

    /// The item exists but holds fewer units than requested
    InsufficientStock {
        item_id: ItemId,
        name: String,
        requested: u32,
        available: u32,
    },

    /// A quantity of zero orders nothing
    ZeroQuantity { item_id: ItemId },

    /// The line's subtotal, or the order total with it, exceeds the
    /// largest representable amount
    AmountTooLarge { item_id: ItemId, name: String },
}

impl LineOutcome {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, LineOutcome::Fulfilled(_))
    }

    /// Message for the operator when the line was not fulfilled
    pub fn rejection_notice(&self) -> Option<String> {
        match self {
            LineOutcome::Fulfilled(_) => None,
            LineOutcome::NotFound { item_id } => {
                Some(format!("Item with ID {} not found.", item_id))
            }
            LineOutcome::InsufficientStock { name, .. } => {
                Some(format!("Insufficient stock for {}.", name))
            }
            LineOutcome::ZeroQuantity { item_id } => Some(format!(
                "Quantity for item {} must be at least 1.",
                item_id
            )),
            LineOutcome::AmountTooLarge { name, .. } => {
                Some(format!("Order amount too large for {}.", name))
            }
        }
    }
}
