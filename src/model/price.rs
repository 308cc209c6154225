//! Price type
//!
//! Fixed-point money backed by `rust_decimal`, normalized to cents.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CafeError, Result};

/// Number of decimal places kept and displayed
const SCALE: u32 = 2;

/// A non-negative amount of money, rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    /// Largest representable amount
    pub const MAX: Price = Price(Decimal::MAX);

    /// Build a price from a decimal, rejecting negatives
    pub fn new(amount: Decimal) -> Result<Self> {
        if amount < Decimal::ZERO {
            return Err(CafeError::InvalidPrice(format!(
                "{} is negative",
                amount
            )));
        }
        Ok(Self(amount.round_dp_with_strategy(
            SCALE,
            RoundingStrategy::MidpointAwayFromZero,
        )))
    }

    /// Build a price from a whole number of cents
    pub fn from_cents(cents: u64) -> Self {
        Self(Decimal::from(cents) / Decimal::ONE_HUNDRED)
    }

    /// Cost of `quantity` units at this price, `None` on overflow
    pub fn checked_times(self, quantity: u32) -> Option<Price> {
        self.0.checked_mul(Decimal::from(quantity)).map(Price)
    }

    /// Sum of two prices, `None` on overflow
    pub fn checked_add(self, rhs: Price) -> Option<Price> {
        self.0.checked_add(rhs.0).map(Price)
    }

    /// The underlying decimal amount
    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = CafeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let amount = Decimal::from_str(trimmed)
            .map_err(|e| CafeError::InvalidPrice(format!("'{}': {}", trimmed, e)))?;
        Price::new(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

// Operators saturate at `Price::MAX`; use the checked forms where
// overflow must be reported.
impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        *self = *self + rhs;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

// Persisted as text with exactly two decimals ("8.99").
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
