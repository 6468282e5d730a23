// Per-run harness context and the controller key-derivation capability.

use parking_lot::Mutex;
use std::sync::Arc;

use crate::config::HarnessConfig;
use crate::model::{ActionRef, CacheKey};
use crate::page::{PageCacheRegistry, RouteOptions};
use crate::store::{CacheStore, MemoryStore, RecordingStore};


const DEFAULT_HOST: &str = "test.host";

/// Issues a plain retrieval request against the application under test.
/// Used by `assert_cache_pages` when the caller supplies no block.
pub trait RequestDriver: Send + Sync {
    fn get(&self, ctx: &CacheTestContext, path: &str) -> anyhow::Result<()>;
}

/// Key-derivation context established by an executed request.
///
/// Request-handling glue constructs one of these when a controller takes over
/// a request and registers it on the [`CacheTestContext`]; the harness uses it
/// to derive the cache keys it verifies.
#[derive(Debug, Clone)]
pub struct ControllerContext {
    controller: String,
    host: String,
}

impl ControllerContext {
    pub fn new(controller: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            host: DEFAULT_HOST.to_string(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// Derives the fragment cache key for `target`.
    ///
    /// A bare name keys a named fragment directly; a qualified reference keys
    /// the url-style fragment of a controller action, defaulting the
    /// controller to this context's own.
    pub fn fragment_cache_key(&self, target: &ActionRef) -> CacheKey {
        match target {
            ActionRef::Name(name) => CacheKey::new(format!("views/{name}")),
            ActionRef::Qualified {
                controller,
                action,
                suffix,
            } => {
                let controller = controller.as_deref().unwrap_or(&self.controller);
                let mut key = format!("views/{}/{}/{}", self.host, controller, action);
                if let Some(suffix) = suffix {
                    key.push('/');
                    key.push_str(suffix);
                }
                CacheKey::new(key)
            }
        }
    }

    /// Derives the action cache key for `target`; a bare name is first
    /// normalized to a qualified reference against this controller.
    pub fn action_cache_key(&self, target: &ActionRef) -> CacheKey {
        self.fragment_cache_key(&target.clone().normalize())
    }
}

/// Explicit per-test-run harness state.
///
/// Replaces process-wide registries: the recorder, the page registry and the
/// current controller all live here and are passed by reference into both the
/// harness and the framework glue, so nothing leaks across test runs.
pub struct CacheTestContext {
    config: HarnessConfig,
    store: Arc<RecordingStore>,
    pages: Arc<PageCacheRegistry>,
    controller: Mutex<Option<ControllerContext>>,
    driver: Mutex<Option<Arc<dyn RequestDriver>>>,
}

impl CacheTestContext {
    /// Builds a context around the given real store and enables caching code
    /// paths, the way framework test configuration would.
    pub fn new(config: HarnessConfig, real_store: Arc<dyn CacheStore>) -> Self {
        config.enable_caching();
        let store = if config.forward_delete_matched {
            RecordingStore::with_forwarding(real_store)
        } else {
            RecordingStore::new(real_store)
        };
        Self {
            config,
            store: Arc::new(store),
            pages: Arc::new(PageCacheRegistry::new()),
            controller: Mutex::new(None),
            driver: Mutex::new(None),
        }
    }

    /// Context with default configuration over an in-memory store.
    pub fn with_memory_store() -> Self {
        Self::new(HarnessConfig::default(), Arc::new(MemoryStore::new()))
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// The recording store the framework under test must cache through.
    pub fn store(&self) -> &Arc<RecordingStore> {
        &self.store
    }

    /// The page cache registry subscribed to the page lifecycle hooks.
    pub fn pages(&self) -> &Arc<PageCacheRegistry> {
        &self.pages
    }

    pub fn caching_enabled(&self) -> bool {
        self.config.caching_enabled()
    }

    /// Called by request-handling glue when a controller takes over a request.
    pub fn enter_controller(&self, controller: ControllerContext) {
        *self.controller.lock() = Some(controller);
    }

    /// The controller established by the last executed request, if any.
    pub fn controller(&self) -> Option<ControllerContext> {
        self.controller.lock().clone()
    }

    pub(crate) fn clear_controller(&self) {
        *self.controller.lock() = None;
    }

    /// Installs the driver used for implicit page retrievals.
    pub fn set_request_driver(&self, driver: Arc<dyn RequestDriver>) {
        *self.driver.lock() = Some(driver);
    }

    pub(crate) fn request_driver(&self) -> Option<Arc<dyn RequestDriver>> {
        self.driver.lock().clone()
    }

    /// Per-controller convenience: was the page addressed by `route` cached?
    pub fn route_cached(&self, route: &RouteOptions) -> bool {
        self.pages.cached(route.to_path().as_str())
    }

    /// Per-controller convenience: was the page addressed by `route` expired?
    pub fn route_expired(&self, route: &RouteOptions) -> bool {
        self.pages.expired(route.to_path().as_str())
    }
}
