//! In-memory store backend, used by tests and handler-level unit tests.

use std::sync::RwLock;

use super::document::StoreDocument;
use super::errors::StoreResult;
use super::seed::seed_document;
use super::Store;

/// [`Store`] that keeps the document in memory. Same whole-document
/// load/save contract as [`FileStore`](super::FileStore), no disk involved.
pub struct MemoryStore {
    doc: RwLock<StoreDocument>,
}

impl MemoryStore {
    /// Start from the seed catalog with no orders.
    pub fn seeded() -> Self {
        Self::with_document(seed_document())
    }

    /// Start from an arbitrary document.
    pub fn with_document(doc: StoreDocument) -> Self {
        Self {
            doc: RwLock::new(doc),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> StoreResult<StoreDocument> {
        // A poisoned lock still holds a whole document; keep serving it.
        let guard = self.doc.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, doc: &StoreDocument) -> StoreResult<()> {
        let mut guard = self.doc.write().unwrap_or_else(|e| e.into_inner());
        *guard = doc.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::seeded();
        let mut doc = store.load().unwrap();
        doc.order_seq = 7;
        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap().order_seq, 7);
    }
}
