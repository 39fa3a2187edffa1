use serde::{Deserialize, Serialize};

use medtrack_core::{DomainResult, InventoryError, ItemId};

/// One inventory record: a named medicine with a stock count.
///
/// `id` is assigned at creation and never changes; `stock` is kept
/// non-negative structurally (`u64`), with the sell guard enforced by
/// [`crate::Inventory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    stock: u64,
}

impl Item {
    /// Create a new item with a fresh identifier.
    ///
    /// Fails with `Validation` if `name` trims to empty.
    pub fn new(name: impl Into<String>, stock: u64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InventoryError::validation("name cannot be empty"));
        }
        Ok(Self {
            id: ItemId::new(),
            name,
            stock,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    /// Copy of this item with a different stock level. Identity unchanged.
    pub(crate) fn with_stock(&self, stock: u64) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            stock,
        }
    }

    /// Copy of this item with a different name and stock. Identity unchanged.
    pub(crate) fn with_details(&self, name: String, stock: u64) -> Self {
        Self {
            id: self.id,
            name,
            stock,
        }
    }

    /// Case-insensitive substring match on the item name.
    pub(crate) fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
