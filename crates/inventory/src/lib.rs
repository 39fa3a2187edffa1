//! Inventory domain module.
//!
//! This crate contains the business rules for the medicine inventory,
//! implemented purely as deterministic state transitions over the whole
//! collection (no IO, no storage). Every mutator takes the current
//! collection by reference and returns a replacement collection, so callers
//! always hold a complete, consistent snapshot.

pub mod inventory;
pub mod item;

pub use inventory::Inventory;
pub use item::Item;
