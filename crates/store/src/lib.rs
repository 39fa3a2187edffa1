//! Persistence collaborators for the inventory.
//!
//! The store contract is deliberately small: the whole collection is the
//! unit of persistence, loaded once at session start and overwritten in
//! full after every mutation. There is no partial or incremental write.

pub mod json_file;
pub mod memory;

use thiserror::Error;

use medtrack_inventory::Inventory;

/// Storage-level error. Wrapped by the session layer as a persistence
/// failure; domain errors never originate here.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Full-snapshot persistence contract.
///
/// `load` is forgiving: a missing or malformed snapshot yields an empty
/// collection rather than an error. `save` overwrites the entire snapshot.
pub trait SnapshotStore {
    fn load(&self) -> Result<Inventory, StoreError>;
    fn save(&self, inventory: &Inventory) -> Result<(), StoreError>;
}

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
