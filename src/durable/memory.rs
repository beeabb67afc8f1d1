//! In-memory durable store
//!
//! HashMap behind a shared RwLock. Cloning the handle shares the map, so a
//! second `PlayerStore` opened on a clone rehydrates what the first wrote.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;

use crate::error::Result;

use super::DurableStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the value under `key`, returning it
    pub fn remove(&self, key: &str) -> Option<Bytes> {
        self.data.write().remove(key)
    }

    /// All keys currently present, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.data.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl DurableStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Bytes>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: Bytes) -> Result<()> {
        self.data.write().insert(key.to_string(), value);
        Ok(())
    }
}
