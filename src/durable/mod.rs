//! Durable Store Module
//!
//! The key-value byte store the player collection is mirrored into.
//!
//! ## Responsibilities
//! - `get(key)` returns the last bytes written under `key`, if any
//! - `set(key, bytes)` replaces them; the write is complete when it returns
//!
//! ## Backends
//! - `MemoryStore`: shared in-process map (clones see the same data)
//! - `FileStore`: one file per key, replaced atomically
//!
//! ```text
//!   {root}/
//!     ├── players.snapshot
//!     └── players.snapshot.tmp   (only while a write is in flight)
//! ```

mod file;
mod memory;

use bytes::Bytes;

use crate::error::Result;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Opaque durable key-value byte store
pub trait DurableStore: Send + Sync {
    /// Read the bytes stored under `key`
    fn get(&self, key: &str) -> Result<Option<Bytes>>;

    /// Replace the bytes stored under `key`
    fn set(&self, key: &str, value: Bytes) -> Result<()>;
}

impl<T: DurableStore + ?Sized> DurableStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Bytes) -> Result<()> {
        (**self).set(key, value)
    }
}
