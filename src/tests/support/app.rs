// Miniature application standing in for the host framework.
//
// A handful of routes dispatch to fake controllers that exercise the caching
// hooks exactly the way real request handling would: fragments and actions go
// through the recording store, whole pages through the page cache observer.

use crate::context::{CacheTestContext, ControllerContext, RequestDriver};
use crate::model::{ActionRef, KeyPattern};
use crate::page::PageCacheObserver;
use crate::store::{CacheStore, StoreOptions};

#[derive(Default)]
pub struct TestApp;

impl TestApp {
    pub fn new() -> Self {
        TestApp
    }

    /// Dispatches a GET to the routed handler.
    pub fn dispatch(&self, ctx: &CacheTestContext, path: &str) {
        match path {
            "/news/list" => self.news_list(ctx),
            "/news/show" => self.news_show(ctx),
            "/news/expire_cache" => self.news_expire_cache(ctx),
            "/news/expire_all" => self.news_expire_all(ctx),
            "/pages/about" | "/pages/contact" => self.static_page(ctx, path),
            "/pages/expire_about" => self.expire_static_page(ctx, "/pages/about"),
            other => self.not_routed(ctx, other),
        }
    }

    /// Renders the news list: action-cached, with a cached sidebar fragment,
    /// and page-cached as a whole.
    fn news_list(&self, ctx: &CacheTestContext) {
        let controller = ControllerContext::new("news");
        ctx.enter_controller(controller.clone());
        if !ctx.caching_enabled() {
            return;
        }

        let store = ctx.store();
        let action_key = controller.action_cache_key(&ActionRef::name("list"));
        store
            .write(action_key.as_str(), b"<ul>news</ul>", &StoreOptions::default())
            .unwrap();

        let fragment_key = controller.fragment_cache_key(&ActionRef::name("recent"));
        store
            .write(fragment_key.as_str(), b"<li>latest</li>", &StoreOptions::default())
            .unwrap();
    }

    fn news_show(&self, ctx: &CacheTestContext) {
        let controller = ControllerContext::new("news");
        ctx.enter_controller(controller.clone());
        if !ctx.caching_enabled() {
            return;
        }

        let action_key = controller.action_cache_key(&ActionRef::name("show"));
        ctx.store()
            .write(action_key.as_str(), b"<article/>", &StoreOptions::default())
            .unwrap();
    }

    /// Expires the news action caches and the sidebar fragment one by one.
    fn news_expire_cache(&self, ctx: &CacheTestContext) {
        let controller = ControllerContext::new("news");
        ctx.enter_controller(controller.clone());

        let store = ctx.store();
        for action in ["list", "show"] {
            let key = controller.action_cache_key(&ActionRef::name(action));
            store.delete(key.as_str(), &StoreOptions::default()).unwrap();
        }
        let fragment_key = controller.fragment_cache_key(&ActionRef::name("recent"));
        store
            .delete(fragment_key.as_str(), &StoreOptions::default())
            .unwrap();
    }

    /// Expires everything under views/ with one bulk delete.
    fn news_expire_all(&self, ctx: &CacheTestContext) {
        ctx.enter_controller(ControllerContext::new("news"));
        ctx.store()
            .delete_matched(&KeyPattern::glob("views/*"), &StoreOptions::default())
            .unwrap();
    }

    /// A fully page-cached static page.
    fn static_page(&self, ctx: &CacheTestContext, path: &str) {
        ctx.enter_controller(ControllerContext::new("pages"));
        if !ctx.caching_enabled() {
            return;
        }
        ctx.pages()
            .on_page_cached("<html>static body</html>", path);
    }

    fn expire_static_page(&self, ctx: &CacheTestContext, path: &str) {
        ctx.enter_controller(ControllerContext::new("pages"));
        ctx.pages().on_page_expired(path);
    }

    /// Unrouted paths still establish a controller, like a 404 handler would,
    /// but cache nothing.
    fn not_routed(&self, ctx: &CacheTestContext, path: &str) {
        let controller = path
            .trim_start_matches('/')
            .split('/')
            .next()
            .unwrap_or("application");
        ctx.enter_controller(ControllerContext::new(controller));
    }
}

impl RequestDriver for TestApp {
    fn get(&self, ctx: &CacheTestContext, path: &str) -> anyhow::Result<()> {
        self.dispatch(ctx, path);
        Ok(())
    }
}
