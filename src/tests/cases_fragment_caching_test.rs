// Integration tests for fragment caching assertions.

use crate::context::CacheTestContext;
use crate::harness::{CacheAssertions, HarnessError};
use crate::model::ActionRef;
use crate::support::{init_test_logging, TestApp};

/// Test that a request caching a named fragment satisfies the assertion.
#[test]
fn test_cache_fragments_functional() {
    init_test_logging();
    let ctx = CacheTestContext::with_memory_store();
    let app = TestApp::new();
    let harness = CacheAssertions::functional(&ctx);

    harness
        .assert_cache_fragments(&[ActionRef::name("recent")], |_| {
            app.dispatch(&ctx, "/news/list")
        })
        .unwrap();
}

/// Test that an uncached fragment fails with its name in the message.
#[test]
fn test_cache_fragments_reports_missing_fragment() {
    init_test_logging();
    let ctx = CacheTestContext::with_memory_store();
    let app = TestApp::new();
    let harness = CacheAssertions::functional(&ctx);

    let err = harness
        .assert_cache_fragments(&[ActionRef::name("weather")], |_| {
            app.dispatch(&ctx, "/news/list")
        })
        .unwrap_err();

    assert!(matches!(err, HarnessError::NotCached { .. }));
    assert!(err.to_string().contains("weather"));
}

/// Test that expiring a fragment satisfies the expire assertion.
#[test]
fn test_expire_fragments() {
    init_test_logging();
    let ctx = CacheTestContext::with_memory_store();
    let app = TestApp::new();
    let harness = CacheAssertions::functional(&ctx);

    // warm the fragment first, then expire it through another action
    app.dispatch(&ctx, "/news/list");

    harness
        .assert_expire_fragments(&[ActionRef::name("recent")], |_| {
            app.dispatch(&ctx, "/news/expire_cache")
        })
        .unwrap();
}

/// Test that a block dispatching nothing is a usage error.
#[test]
fn test_fragments_require_a_request() {
    init_test_logging();
    let ctx = CacheTestContext::with_memory_store();
    let harness = CacheAssertions::functional(&ctx);

    let err = harness
        .assert_cache_fragments(&[ActionRef::name("recent")], |_| {})
        .unwrap_err();
    assert!(matches!(err, HarnessError::NoRequestInBlock));
}

/// Test that integration mode insists on qualified fragment targets.
#[test]
fn test_fragments_integration_mode_requires_controller() {
    init_test_logging();
    let ctx = CacheTestContext::with_memory_store();
    let harness = CacheAssertions::integration(&ctx);

    let err = harness
        .assert_cache_fragments(&[ActionRef::name("recent")], |_| {
            panic!("targets are rejected before the block runs")
        })
        .unwrap_err();
    assert!(matches!(err, HarnessError::NoControllerInTarget(_)));
}

/// Test a qualified fragment target in integration mode end to end.
#[test]
fn test_cache_fragments_integration() {
    init_test_logging();
    let ctx = CacheTestContext::with_memory_store();
    let app = TestApp::new();
    let harness = CacheAssertions::integration(&ctx);

    harness
        .assert_cache_actions(&[ActionRef::qualified("news", "list")], |_| {
            app.dispatch(&ctx, "/news/list")
        })
        .unwrap();
}
