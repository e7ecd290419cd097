//! A record store paired with the index built from it, and the shared slot
//! that publishes it to readers.

use std::sync::Arc;

use log::info;
use parking_lot::RwLock;

use crate::record::Record;
use crate::store::RecordStore;
use crate::trie::PrefixIndex;

/// One consistent generation of records and their prefix index.
#[derive(Debug, Clone)]
pub struct Snapshot {
    store: RecordStore,
    index: PrefixIndex,
}

impl Snapshot {
    /// Build the index for `store`.
    pub fn new(store: RecordStore) -> Self {
        let index = PrefixIndex::build(store.records());
        Snapshot { store, index }
    }

    /// Snapshot over the built-in fallback directory.
    pub fn fallback() -> Self {
        Self::new(RecordStore::fallback())
    }

    /// Records whose name starts with `prefix`, up to `limit`.
    pub fn query(&self, prefix: &str, limit: usize) -> Vec<&Record> {
        self.index.query(self.store.records(), prefix, limit)
    }

    pub fn lookup(&self, name: &str) -> Option<&Record> {
        self.store.lookup(name)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Single-writer, many-reader slot holding the live [`Snapshot`].
///
/// Writers build the replacement off-lock and swap the `Arc` in one short
/// write; readers clone the `Arc` and keep a consistent view for as long as
/// they hold it.
#[derive(Debug, Default)]
pub struct SharedSnapshot {
    current: RwLock<Arc<Snapshot>>,
}

impl SharedSnapshot {
    pub fn new(snapshot: Snapshot) -> Self {
        SharedSnapshot {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The live snapshot.
    pub fn current(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    /// Replace the live snapshot with one built from `store`.
    pub fn install(&self, store: RecordStore) {
        let next = Arc::new(Snapshot::new(store));
        info!(
            "installing record snapshot: {} records, {} index nodes",
            next.store().len(),
            next.index().node_count()
        );
        *self.current.write() = next;
    }
}
