// Package model provides cache key types, action references and key patterns.

pub mod action;
pub mod key;
pub mod pattern;


pub use action::ActionRef;
pub use key::{CacheKey, PathKey};
pub use pattern::KeyPattern;
