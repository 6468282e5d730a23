// Package page provides the page cache registry and URL path canonicalization.

pub mod canonical;
pub mod registry;


pub use canonical::{canonical_path, RouteOptions};
pub use registry::{PageCacheObserver, PageCacheRegistry};
