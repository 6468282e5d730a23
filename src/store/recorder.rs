//! Recording wrapper around a real cache store.

use anyhow::Result;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

use super::store::{CacheStore, StoreOptions};
use crate::model::{CacheKey, KeyPattern};

/// Everything observed since the last reset, in call order.
#[derive(Default)]
struct Records {
    written: Vec<CacheKey>,
    deleted: Vec<CacheKey>,
    delete_matchers: Vec<KeyPattern>,
}

/// Cache store substitute that preserves the wrapped store's behavior while
/// logging every mutation for later inspection.
///
/// Writes and deletes are recorded and forwarded; bulk deletes are recorded
/// only, unless forwarding was requested at construction.
pub struct RecordingStore {
    inner: Arc<dyn CacheStore>,
    records: Mutex<Records>,
    forward_delete_matched: bool,
}

impl RecordingStore {
    /// Wraps `inner`. Bulk deletes are observed but not forwarded.
    pub fn new(inner: Arc<dyn CacheStore>) -> Self {
        Self {
            inner,
            records: Mutex::new(Records::default()),
            forward_delete_matched: false,
        }
    }

    /// Wraps `inner` and forwards bulk deletes to it as well.
    pub fn with_forwarding(inner: Arc<dyn CacheStore>) -> Self {
        Self {
            forward_delete_matched: true,
            ..Self::new(inner)
        }
    }

    /// Clears all records and the wrapped store's data in one step.
    /// Idempotent; runs before every assertion block.
    pub fn reset(&self) {
        let mut records = self.records.lock();
        records.written.clear();
        records.deleted.clear();
        records.delete_matchers.clear();
        // cleared under the records lock so no observer sees a half-reset store
        self.inner.clear();
    }

    /// Reports whether `key` was written since the last reset.
    pub fn written(&self, key: &CacheKey) -> bool {
        self.records.lock().written.contains(key)
    }

    /// Reports whether `key` was deleted since the last reset, either
    /// explicitly or through a recorded bulk-delete pattern.
    pub fn deleted(&self, key: &CacheKey) -> bool {
        let records = self.records.lock();
        records.deleted.contains(key)
            || records
                .delete_matchers
                .iter()
                .any(|matcher| matcher.matches(key.as_str()))
    }

    /// Keys written since the last reset, in call order.
    pub fn written_keys(&self) -> Vec<CacheKey> {
        self.records.lock().written.clone()
    }

    /// Keys explicitly deleted since the last reset, in call order.
    pub fn deleted_keys(&self) -> Vec<CacheKey> {
        self.records.lock().deleted.clone()
    }
}

impl CacheStore for RecordingStore {
    fn read(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &[u8], options: &StoreOptions) -> Result<()> {
        self.records.lock().written.push(CacheKey::new(key));
        debug!(
            component = "recording_store",
            event = "write",
            key,
            "recorded fragment write"
        );
        self.inner.write(key, value, options)
    }

    fn delete(&self, key: &str, options: &StoreOptions) -> Result<()> {
        self.records.lock().deleted.push(CacheKey::new(key));
        debug!(
            component = "recording_store",
            event = "delete",
            key,
            "recorded fragment delete"
        );
        self.inner.delete(key, options)
    }

    fn delete_matched(&self, pattern: &KeyPattern, options: &StoreOptions) -> Result<()> {
        self.records.lock().delete_matchers.push(pattern.clone());
        debug!(
            component = "recording_store",
            event = "delete_matched",
            pattern = %pattern,
            forwarded = self.forward_delete_matched,
            "recorded bulk delete"
        );
        if self.forward_delete_matched {
            return self.inner.delete_matched(pattern, options);
        }
        Ok(())
    }

    fn clear(&self) {
        self.inner.clear();
    }
}
