//! # Store Module
//!
//! Persistence layer for the storefront. One JSON document holds the whole
//! catalog and order book; every access round-trips the entire dataset,
//! which bounds this design to small catalogs and order volumes.
//!
//! Handlers depend on the [`Store`] trait, never on a concrete backend, so
//! tests can substitute [`MemoryStore`] for the flat-file [`FileStore`].

pub mod document;
pub mod errors;
pub mod file;
pub mod memory;
pub mod seed;

pub use document::{format_order_id, round2, Order, Product, StoreDocument};
pub use document::{INITIAL_ORDER_STATUS, PAYMENT_METHOD};
pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;

/// Whole-document persistence.
///
/// `load` returns the full document; `save` overwrites it wholesale. There
/// is no partial read or write, and no cross-process locking: concurrent
/// load-mutate-save sequences race with last-writer-wins semantics.
pub trait Store: Send + Sync {
    /// Load the full document, initializing the backing data first if needed.
    fn load(&self) -> StoreResult<StoreDocument>;

    /// Serialize and overwrite the full document.
    fn save(&self, doc: &StoreDocument) -> StoreResult<()>;
}
