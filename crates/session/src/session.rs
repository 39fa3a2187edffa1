//! The running session: one snapshot holder, one store writer.

use medtrack_core::ItemId;
use medtrack_inventory::{Inventory, Item};
use medtrack_store::SnapshotStore;

use crate::view::ViewSink;
use crate::SessionError;

/// Holds the current inventory snapshot and drives the
/// mutate → persist → notify sequence.
///
/// Every mutator computes a full replacement snapshot from the current one,
/// swaps it in whole, hands it to the store, then notifies the attached
/// view sinks. A domain failure leaves both the snapshot and the store
/// untouched; a persistence failure keeps the new in-memory snapshot (the
/// running session's source of truth) and is reported to the caller.
pub struct Session<S: SnapshotStore> {
    inventory: Inventory,
    store: S,
    sinks: Vec<Box<dyn ViewSink>>,
}

impl<S: SnapshotStore> Session<S> {
    /// Start a session from the store's last saved snapshot.
    pub fn start(store: S) -> Result<Self, SessionError> {
        let inventory = store.load()?;
        tracing::info!(items = inventory.len(), "session started");
        Ok(Self {
            inventory,
            store,
            sinks: Vec::new(),
        })
    }

    /// Attach a view collaborator. Sinks are notified in attach order.
    pub fn attach(&mut self, sink: Box<dyn ViewSink>) {
        self.sinks.push(sink);
    }

    /// Current snapshot.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn add(&mut self, name: &str, initial_stock: u64) -> Result<(), SessionError> {
        let next = self.inventory.add(name, initial_stock)?;
        tracing::info!(name, initial_stock, "item added");
        self.commit(next)
    }

    pub fn edit(&mut self, id: ItemId, new_name: &str, new_stock: u64) -> Result<(), SessionError> {
        let next = self.inventory.edit(id, new_name, new_stock)?;
        tracing::info!(%id, new_name, new_stock, "item edited");
        self.commit(next)
    }

    /// Remove is idempotent by id; removing an absent item still counts as
    /// a successful mutation and is persisted.
    pub fn remove(&mut self, id: ItemId) -> Result<(), SessionError> {
        let next = self.inventory.remove(id);
        tracing::info!(%id, "item removed");
        self.commit(next)
    }

    pub fn buy(&mut self, id: ItemId, quantity: u64) -> Result<(), SessionError> {
        let next = self.inventory.buy(id, quantity)?;
        tracing::info!(%id, quantity, "stock bought");
        self.commit(next)
    }

    pub fn sell(&mut self, id: ItemId, quantity: u64) -> Result<(), SessionError> {
        let next = self.inventory.sell(id, quantity)?;
        tracing::info!(%id, quantity, "stock sold");
        self.commit(next)
    }

    /// Pure filter over the current snapshot; no side effects, never
    /// persisted.
    pub fn search(&self, query: &str) -> Vec<&Item> {
        self.inventory.search(query)
    }

    /// Swap in the replacement snapshot, persist it, notify the view.
    ///
    /// The swap happens before the store write: in-memory state is the
    /// source of truth and is not rolled back on a failed save. The view is
    /// notified either way, since the state it renders did change.
    fn commit(&mut self, next: Inventory) -> Result<(), SessionError> {
        self.inventory = next;
        let persisted = self.store.save(&self.inventory);
        if let Err(err) = &persisted {
            tracing::error!(error = %err, "snapshot save failed, in-memory state kept");
        }
        for sink in &mut self.sinks {
            sink.inventory_changed(&self.inventory);
        }
        persisted.map_err(SessionError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    use medtrack_core::InventoryError;
    use medtrack_store::{InMemoryStore, SnapshotStore, StoreError};

    /// Sink that records the item count it saw on each notification.
    struct RecordingSink {
        seen: Rc<RefCell<Vec<usize>>>,
    }

    impl ViewSink for RecordingSink {
        fn inventory_changed(&mut self, inventory: &Inventory) {
            self.seen.borrow_mut().push(inventory.len());
        }
    }

    /// Store whose saves always fail, to exercise the persistence path.
    struct BrokenStore;

    impl SnapshotStore for BrokenStore {
        fn load(&self) -> Result<Inventory, StoreError> {
            Ok(Inventory::new())
        }

        fn save(&self, _inventory: &Inventory) -> Result<(), StoreError> {
            Err(StoreError::Io(io::Error::other("disk full")))
        }
    }

    fn session_with_sink() -> (Session<InMemoryStore>, Rc<RefCell<Vec<usize>>>) {
        let mut session = Session::start(InMemoryStore::new()).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        session.attach(Box::new(RecordingSink { seen: seen.clone() }));
        (session, seen)
    }

    fn only_id(session: &Session<InMemoryStore>) -> ItemId {
        session.inventory().items()[0].id()
    }

    #[test]
    fn successful_mutation_persists_then_notifies() {
        let (mut session, seen) = session_with_sink();

        session.add("Aspirin", 10).unwrap();
        assert_eq!(session.inventory().len(), 1);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn domain_failure_changes_nothing_and_stays_silent() {
        let (mut session, seen) = session_with_sink();
        session.add("Paracetamol", 5).unwrap();
        let id = only_id(&session);

        let err = session.sell(id, 9).unwrap_err();
        match err {
            SessionError::Domain(InventoryError::InsufficientStock {
                available,
                requested,
            }) => {
                assert_eq!((available, requested), (5, 9));
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }
        assert_eq!(session.inventory().get(id).unwrap().stock(), 5);
        // Only the add was ever announced.
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn buy_and_sell_flow_matches_the_counter() {
        let (mut session, _) = session_with_sink();
        session.add("Aspirin", 10).unwrap();
        let id = only_id(&session);

        session.sell(id, 4).unwrap();
        assert_eq!(session.inventory().get(id).unwrap().stock(), 6);

        session.buy(id, 2).unwrap();
        assert_eq!(session.inventory().get(id).unwrap().stock(), 8);
    }

    #[test]
    fn state_survives_a_restart_through_the_store() {
        let store = InMemoryStore::new();

        let mut session = Session::start(store.clone()).unwrap();
        session.add("Aspirin", 10).unwrap();
        session.add("Cough Syrup", 3).unwrap();
        let persisted = session.inventory().clone();
        drop(session);

        // A fresh session over the same backing store sees the snapshot.
        let revived = Session::start(store).unwrap();
        assert_eq!(revived.inventory(), &persisted);
    }

    #[test]
    fn persistence_failure_keeps_in_memory_state_and_notifies() {
        let mut session = Session::start(BrokenStore).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        session.attach(Box::new(RecordingSink { seen: seen.clone() }));

        let err = session.add("Aspirin", 10).unwrap_err();
        assert!(matches!(err, SessionError::Persistence(_)));
        // In-memory is the source of truth for the running session.
        assert_eq!(session.inventory().len(), 1);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn remove_of_unknown_id_is_a_persisted_no_op() {
        let (mut session, seen) = session_with_sink();
        session.add("Aspirin", 10).unwrap();

        session.remove(ItemId::new()).unwrap();
        assert_eq!(session.inventory().len(), 1);
        assert_eq!(*seen.borrow(), vec![1, 1]);
    }

    #[test]
    fn search_reads_the_current_snapshot() {
        let (mut session, _) = session_with_sink();
        session.add("Aspirin", 10).unwrap();
        session.add("Cough Syrup", 3).unwrap();

        let hits = session.search("cou");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Cough Syrup");
    }
}
