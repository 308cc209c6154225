//! # CampusBites
//!
//! A single-operator cafeteria console with:
//! - A menu of priced, stocked items grouped by category
//! - A customer roster
//! - Order placement with per-line stock validation and a receipt
//! - Flat-file persistence, rewritten atomically after every change
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Console Driver                           │
//! │             (numbered menu, line prompts)                    │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │                              │
//!                ▼                              ▼
//!        ┌──────────────┐               ┌──────────────┐
//!        │   Catalog    │               │ Order Engine │
//!        │ (add/update/ │               │  (validate,  │
//!        │   remove)    │               │ fulfill, sum)│
//!        └──────┬───────┘               └──────┬───────┘
//!               │                              │
//!               └──────────────┬───────────────┘
//!                              ▼
//!                      ┌──────────────┐
//!                      │ Record Store │
//!                      │ (menu, roster│
//!                      │  + backend)  │
//!                      └──────┬───────┘
//!                             ▼
//!                  menu.txt / customers.txt
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod catalog;
pub mod console;
pub mod model;
pub mod order;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use config::Config;
pub use console::Driver;
pub use error::{CafeError, Result};
pub use model::{Customer, MenuItem, Price};
pub use order::{OrderEngine, Receipt};
pub use store::{FsBackend, MemBackend, RecordStore, StorageBackend};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of CampusBites
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
