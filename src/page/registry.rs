//! Page cache registry fed by the framework's page-cache lifecycle hooks.

use parking_lot::Mutex;
use tracing::info;

use super::canonical::canonical_path;
use crate::model::PathKey;

/// Notification points a host framework calls when it caches or expires a
/// page. The registry subscribes here instead of patching the framework's own
/// lifecycle methods.
pub trait PageCacheObserver: Send + Sync {
    /// A rendered page body was cached under `path`.
    fn on_page_cached(&self, content: &str, path: &str);

    /// The page cached under `path` was expired.
    fn on_page_expired(&self, path: &str);
}

#[derive(Default)]
struct PageSets {
    cached: Vec<PathKey>,
    expired: Vec<PathKey>,
}

/// Records which paths were page-cached and which were page-expired.
///
/// Entries accumulate between resets; repeatedly caching one path keeps
/// appending, which leaves the containment predicates unchanged.
#[derive(Default)]
pub struct PageCacheRegistry {
    sets: Mutex<PageSets>,
}

impl PageCacheRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports whether `path` was page-cached since the last reset.
    pub fn cached(&self, path: &str) -> bool {
        self.sets.lock().cached.contains(&canonical_path(path))
    }

    /// Reports whether `path` was page-expired since the last reset.
    pub fn expired(&self, path: &str) -> bool {
        self.sets.lock().expired.contains(&canonical_path(path))
    }

    /// Clears both sets. Independent of the fragment recorder's reset.
    pub fn reset(&self) {
        let mut sets = self.sets.lock();
        sets.cached.clear();
        sets.expired.clear();
    }

    /// Paths cached since the last reset, in call order.
    pub fn cached_paths(&self) -> Vec<PathKey> {
        self.sets.lock().cached.clone()
    }

    /// Paths expired since the last reset, in call order.
    pub fn expired_paths(&self) -> Vec<PathKey> {
        self.sets.lock().expired.clone()
    }
}

impl PageCacheObserver for PageCacheRegistry {
    fn on_page_cached(&self, content: &str, path: &str) {
        let path = canonical_path(path);
        // the would-be file write is only logged, never performed
        info!(
            component = "page_cache",
            event = "page_cached",
            path = %path,
            bytes = content.len(),
            "cached page"
        );
        self.sets.lock().cached.push(path);
    }

    fn on_page_expired(&self, path: &str) {
        let path = canonical_path(path);
        info!(
            component = "page_cache",
            event = "page_expired",
            path = %path,
            "expired page"
        );
        self.sets.lock().expired.push(path);
    }
}
