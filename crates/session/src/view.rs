//! View collaborator contract and input coercion.

use medtrack_core::{DomainResult, InventoryError};
use medtrack_inventory::Inventory;

/// Presentation-side observer of inventory changes.
///
/// Called once per successful mutation, after the snapshot has been handed
/// to the store. The sink receives the full replacement collection and
/// re-renders from it; it must not mutate state.
pub trait ViewSink {
    fn inventory_changed(&mut self, inventory: &Inventory);
}

/// Coerce textual quantity input (a dialog field) into a positive integer.
///
/// The view owns no validation beyond this basic parse; anything that is
/// not a positive integer is a `Validation` error, never a silent default.
pub fn parse_quantity(input: &str) -> DomainResult<u64> {
    let quantity: u64 = input
        .trim()
        .parse()
        .map_err(|_| InventoryError::validation(format!("not a whole number: {input:?}")))?;
    if quantity == 0 {
        return Err(InventoryError::validation("quantity must be positive"));
    }
    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_integers() {
        assert_eq!(parse_quantity("4").unwrap(), 4);
        assert_eq!(parse_quantity("  12 ").unwrap(), 12);
    }

    #[test]
    fn rejects_zero_negative_and_garbage() {
        for input in ["0", "-3", "", "four", "1.5"] {
            assert!(
                matches!(parse_quantity(input), Err(InventoryError::Validation(_))),
                "expected Validation for {input:?}"
            );
        }
    }
}
