//! Receipt rendering

use std::fmt;

use crate::model::Price;

use super::OrderLine;

/// Fulfilled lines of one order and their total
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Receipt {
    lines: Vec<OrderLine>,
    total: Price,
}

impl Receipt {
    pub fn new(lines: Vec<OrderLine>, total: Price) -> Self {
        Self { lines, total }
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn total(&self) -> Price {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// ```text
/// === Order Summary ===
/// - Vegan Buddha Bowl x3 @ $10.99 each
/// Total: $32.97
/// ```
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Order Summary ===")?;
        for line in &self.lines {
            writeln!(f, "- {}", line)?;
        }
        writeln!(f, "Total: ${}", self.total)
    }
}
