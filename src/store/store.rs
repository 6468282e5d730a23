// Cache store capability consumed from the host framework.

use anyhow::Result;
use std::time::Duration;

use crate::model::KeyPattern;

/// Options accepted by store mutations.
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    pub expires_in: Option<Duration>,
}

/// Interface of the real fragment/object cache store.
///
/// The recording layer wraps any implementation of this trait. Storage and
/// retrieval semantics stay with the implementor; only the shape of these
/// operations matters to the harness.
pub trait CacheStore: Send + Sync {
    /// Retrieves the value stored under `key`.
    fn read(&self, key: &str) -> Option<Vec<u8>>;

    /// Stores `value` under `key`.
    fn write(&self, key: &str, value: &[u8], options: &StoreOptions) -> Result<()>;

    /// Removes the entry stored under `key`.
    fn delete(&self, key: &str, options: &StoreOptions) -> Result<()>;

    /// Removes every entry whose key matches `pattern`.
    fn delete_matched(&self, pattern: &KeyPattern, options: &StoreOptions) -> Result<()>;

    /// Drops all entries.
    fn clear(&self);
}
