//! Error types for CampusBites
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{CustomerId, ItemId};

/// Result type alias using CafeError
pub type Result<T> = std::result::Result<T, CafeError>;

/// Unified error type for CampusBites operations
#[derive(Debug, Error)]
pub enum CafeError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record File Errors
    // -------------------------------------------------------------------------
    #[error("Malformed record in {} (line {line}): {message}", .path.display())]
    Codec {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    // -------------------------------------------------------------------------
    // Value Errors
    // -------------------------------------------------------------------------
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Catalog Errors
    // -------------------------------------------------------------------------
    #[error("Menu item with ID {0} already exists.")]
    DuplicateMenuItem(ItemId),

    #[error("Customer with ID {0} already exists.")]
    DuplicateCustomer(CustomerId),

    #[error("Menu item with ID {0} not found.")]
    MenuItemNotFound(ItemId),

    #[error("Customer with ID {0} not found.")]
    CustomerNotFound(CustomerId),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
