//! JSON-file-backed snapshot store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use medtrack_inventory::Inventory;

use crate::{SnapshotStore, StoreError};

/// Snapshot store backed by a single JSON file.
///
/// The snapshot is a JSON array of item records; the file is rewritten in
/// full on every save. A missing or unparsable file loads as an empty
/// collection (logged at warn level), never as an error.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Inventory, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no snapshot file, starting empty");
                return Ok(Inventory::new());
            }
            Err(err) => return Err(StoreError::Io(err)),
        };

        match serde_json::from_str(&raw) {
            Ok(inventory) => Ok(inventory),
            Err(err) => {
                // Corrupt data is treated as absence, not a fatal error.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "malformed snapshot, starting empty"
                );
                Ok(Inventory::new())
            }
        }
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string(inventory)?;
        fs::write(&self.path, raw)?;
        tracing::debug!(
            path = %self.path.display(),
            items = inventory.len(),
            "snapshot saved"
        );
        Ok(())
    }
}
