//! Integration tests for cachespy.
//!
//! End-to-end scenarios driving a miniature application through the assertion
//! harness: fragment caching, action caching, page caching and expiry.

mod cases_fragment_caching_test;

pub mod support;
