//! Order Module
//!
//! Turns a sequence of `(item id, quantity)` requests into stock
//! decrements, a running total and a receipt.
//!
//! ## Session Lifecycle
//! ```text
//!            add_line(id, qty)
//!          ┌──────────────────┐
//!          │  validate        │
//!          ▼  fulfill|reject  │
//!   ┌────────────┐            │
//!   │ Collecting │────────────┘
//!   └─────┬──────┘
//!         │ finish()  (sentinel / end of input)
//!         ▼
//!   ┌────────────┐   one menu save
//!   │ Persisting │
//!   └─────┬──────┘
//!         ▼
//!   ┌────────────┐   receipt built
//!   │ Reporting  │
//!   └─────┬──────┘
//!         ▼
//!      Done
//! ```
//!
//! ## Guarantees
//! - Stock never goes below zero: a line is fulfilled only if its quantity
//!   fits the item's current stock, which already reflects earlier lines
//! - Rejected lines change nothing and never reach the receipt
//! - The menu is saved exactly once per session, even when nothing sold

mod line;
mod receipt;
mod session;

pub use line::{LineOutcome, OrderLine};
pub use receipt::Receipt;
pub use session::{OrderEngine, OrderSession, PlacedOrder, SessionState};
