pub mod config;
pub mod context;
pub mod harness;
pub mod model;
pub mod page;
pub mod store;

#[cfg(test)]
mod tests;

#[cfg(test)]
pub use tests::support;

pub use config::HarnessConfig;
pub use context::{CacheTestContext, ControllerContext, RequestDriver};
pub use harness::{CacheAssertions, HarnessError, TestMode};
pub use model::{ActionRef, CacheKey, KeyPattern, PathKey};
pub use page::{canonical_path, PageCacheObserver, PageCacheRegistry, RouteOptions};
pub use store::{CacheStore, MemoryStore, RecordingStore, StoreOptions};
