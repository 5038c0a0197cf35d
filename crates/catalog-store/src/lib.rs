//! The catalog state store.
//!
//! [`CatalogStore`] owns the in-memory `CatalogState` and a storage backend.
//! It is the only place the catalog is mutated. Each mutation that changes
//! something is written through to storage right away; storage failures
//! are logged and never undo the in-memory change.

mod store;

pub use store::CatalogStore;
