// Package harness provides the cache assertion surface.

pub mod assertions;
pub mod error;


pub use assertions::{CacheAssertions, TestMode};
pub use error::HarnessError;
