//! The collection and its transition rules.

use serde::{Deserialize, Serialize};

use medtrack_core::{DomainResult, InventoryError, ItemId};

use crate::item::Item;

/// The full ordered collection of items: the unit of persistence.
///
/// Insertion order is display order; mutators never reorder, search only
/// filters. Every mutator is a full-collection transform returning a
/// replacement `Inventory`, so the caller swaps whole snapshots and no
/// reader can observe a half-updated item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a new item with a fresh id, appended at the end.
    ///
    /// Fails with `Validation` if `name` trims to empty. Existing items are
    /// untouched.
    pub fn add(&self, name: impl Into<String>, initial_stock: u64) -> DomainResult<Self> {
        let item = Item::new(name, initial_stock)?;
        let mut items = self.items.clone();
        items.push(item);
        Ok(Self { items })
    }

    /// Replace the name and stock of the item with `id`, order and identity
    /// preserved.
    ///
    /// Fails with `NotFound` if no item has `id`, `Validation` on an empty
    /// name.
    pub fn edit(&self, id: ItemId, new_name: impl Into<String>, new_stock: u64) -> DomainResult<Self> {
        let new_name = new_name.into();
        if new_name.trim().is_empty() {
            return Err(InventoryError::validation("name cannot be empty"));
        }
        self.require(id)?;
        Ok(self.replace(id, |item| item.with_details(new_name.clone(), new_stock)))
    }

    /// Collection without the item with `id`; order of the rest preserved.
    ///
    /// Deletion is idempotent by id: an absent `id` is a no-op, not an error.
    pub fn remove(&self, id: ItemId) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| item.id() != id)
                .cloned()
                .collect(),
        }
    }

    /// Increase the item's stock by `quantity`. No upper bound on stock.
    ///
    /// Fails with `Validation` if `quantity` is zero or the addition would
    /// overflow, `NotFound` if `id` is absent.
    pub fn buy(&self, id: ItemId, quantity: u64) -> DomainResult<Self> {
        require_positive(quantity)?;
        let item = self.require(id)?;
        let new_stock = item
            .stock()
            .checked_add(quantity)
            .ok_or_else(|| InventoryError::validation("stock overflow"))?;
        Ok(self.replace(id, |item| item.with_stock(new_stock)))
    }

    /// Decrease the item's stock by `quantity`, only if enough is in stock.
    ///
    /// Fails with `InsufficientStock` if `quantity` exceeds the current
    /// stock (the collection is left unchanged), `Validation` if `quantity`
    /// is zero, `NotFound` if `id` is absent.
    pub fn sell(&self, id: ItemId, quantity: u64) -> DomainResult<Self> {
        require_positive(quantity)?;
        let item = self.require(id)?;
        if quantity > item.stock() {
            return Err(InventoryError::insufficient_stock(item.stock(), quantity));
        }
        let new_stock = item.stock() - quantity;
        Ok(self.replace(id, |item| item.with_stock(new_stock)))
    }

    /// Ordered subsequence of items whose name contains `query`,
    /// case-insensitively. An empty query matches everything.
    ///
    /// Pure filter: no reordering, no duplication, never persisted.
    pub fn search(&self, query: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| query.is_empty() || item.name_matches(query))
            .collect()
    }

    fn require(&self, id: ItemId) -> DomainResult<&Item> {
        self.get(id).ok_or_else(|| InventoryError::not_found(id))
    }

    /// Full-collection map replacing the item with `id`; everything else is
    /// cloned as-is, so relative order cannot change.
    fn replace(&self, id: ItemId, f: impl Fn(&Item) -> Item) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|item| if item.id() == id { f(item) } else { item.clone() })
                .collect(),
        }
    }
}

fn require_positive(quantity: u64) -> DomainResult<()> {
    if quantity == 0 {
        return Err(InventoryError::validation("quantity must be positive"));
    }
    Ok(())
}
