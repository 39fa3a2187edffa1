//! In-memory snapshot store.

use std::sync::{Arc, RwLock};

use medtrack_inventory::Inventory;

use crate::{SnapshotStore, StoreError};

/// In-memory snapshot store.
///
/// Intended for tests/dev. Holds at most one snapshot, overwritten on save,
/// matching the single-key semantics of the file-backed store. Clones share
/// the same backing snapshot, so a "restart" can reuse a store handle.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    snapshot: Arc<RwLock<Option<Inventory>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items in the persisted snapshot, if any. Test hook.
    pub fn persisted_len(&self) -> Option<usize> {
        self.snapshot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(Inventory::len)
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self) -> Result<Inventory, StoreError> {
        let guard = self.snapshot.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(inventory.clone());
        Ok(())
    }
}
