//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing items, stock rules). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A value failed validation (e.g. empty name, zero quantity).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An operation targeted an item id not present in the collection.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// Sell requested more units than are in stock. A reported business
    /// condition, not a system fault; the collection is left unchanged.
    #[error("insufficient stock: {available} available, {requested} requested")]
    InsufficientStock { available: u64, requested: u64 },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn insufficient_stock(available: u64, requested: u64) -> Self {
        Self::InsufficientStock {
            available,
            requested,
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
