// Package store provides the cache store interface, the in-memory store and
// the recording wrapper used by the assertion harness.

pub mod memory;
pub mod recorder;
pub mod store;


pub use memory::MemoryStore;
pub use recorder::RecordingStore;
pub use store::{CacheStore, StoreOptions};
