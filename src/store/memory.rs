// In-memory cache store, the default wrapped store.

use anyhow::Result;
use parking_lot::Mutex;
use std::collections::HashMap;

use super::store::{CacheStore, StoreOptions};
use crate::model::KeyPattern;

/// Plain `HashMap` store standing in for the framework's real store when the
/// harness is exercised without one.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries, for tests poking at the wrapped store.
    pub fn len(&self) -> usize {
        self.data.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.lock().is_empty()
    }
}

impl CacheStore for MemoryStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        self.data.lock().get(key).cloned()
    }

    fn write(&self, key: &str, value: &[u8], _options: &StoreOptions) -> Result<()> {
        self.data.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str, _options: &StoreOptions) -> Result<()> {
        self.data.lock().remove(key);
        Ok(())
    }

    fn delete_matched(&self, pattern: &KeyPattern, _options: &StoreOptions) -> Result<()> {
        self.data.lock().retain(|key, _| !pattern.matches(key));
        Ok(())
    }

    fn clear(&self) {
        self.data.lock().clear();
    }
}
