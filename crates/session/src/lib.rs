//! Session layer: owns the current inventory snapshot and the
//! persist-then-notify sequence around every mutation.
//!
//! The view collaborator calls into [`Session`] and re-renders from whatever
//! state it returns; it owns no business logic. The store collaborator is
//! written after every successful mutation and read only at startup.

pub mod session;
pub mod view;

use thiserror::Error;

use medtrack_core::InventoryError;
use medtrack_store::StoreError;

pub use session::Session;
pub use view::{ViewSink, parse_quantity};

/// Failure reported to the view.
///
/// `Domain` means the in-memory state did not change. `Persistence` means it
/// did change but could not be written; in-memory remains the source of
/// truth for the running session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Domain(#[from] InventoryError),

    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),
}
