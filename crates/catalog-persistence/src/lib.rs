//! Persistent storage for the product catalog.
//!
//! The catalog is stored as plain key/value text, the same shape a browser's
//! local storage offers, so the store only needs a tiny port to talk to.
//!
//! # Keys
//!
//! - [`STATE_KEY`] holds the whole `CatalogState` as JSON
//!   (`{"products": [...], "nextId": N}`).
//! - [`RESET_FLAG_KEY`] holds `"true"` when a reset was requested for the
//!   next start; it is consumed on load.
//!
//! # Backends
//!
//! - [`FileStorage`] keeps one file per key in a data directory and writes
//!   atomically (temp file + rename).
//! - [`MemoryStorage`] keeps everything in a map. It can be told to fail,
//!   which is how the store's error paths are tested.
//!
//! # Architecture
//!
//! - `backend.rs` - the `StorageBackend` port and key constants
//! - `file.rs` / `memory.rs` - backends
//! - `codec.rs` - JSON encoding and load/save helpers
//! - `error.rs` - error types with user-friendly messages

mod backend;
mod codec;
mod error;
mod file;
mod memory;

pub use backend::{RESET_FLAG_KEY, RESET_FLAG_VALUE, STATE_KEY, StorageBackend};
pub use codec::{
    clear_state, decode_state, encode_state, load_state, reset_requested, save_state,
    set_reset_flag, take_reset_flag,
};
pub use error::{PersistenceError, Result};
pub use file::FileStorage;
pub use memory::MemoryStorage;
