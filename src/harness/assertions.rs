//! The six cache assertions: cache/expire across fragments, actions and pages.
//!
//! Every assertion follows one protocol: reset the relevant recorder, execute
//! the caller's block (which triggers request handling), then verify by key
//! that the expected cache operations were observed.

use tracing::debug;

use super::error::HarnessError;
use crate::context::{CacheTestContext, ControllerContext};
use crate::model::{ActionRef, CacheKey};
use crate::page::canonical_path;

/// Whether assertions run against a single controller (functional tests) or
/// across controllers (integration tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestMode {
    Functional,
    Integration,
}

/// Which record a verification consults.
#[derive(Clone, Copy)]
enum Expect {
    Written,
    Deleted,
}

/// Which key derivation applies to a target.
#[derive(Clone, Copy)]
enum KeyKind {
    Fragment,
    Action,
}

/// Assertion surface bound to one harness context.
pub struct CacheAssertions<'a> {
    ctx: &'a CacheTestContext,
    mode: TestMode,
}

impl<'a> CacheAssertions<'a> {
    /// Functional-mode assertions: one controller, bare names allowed.
    pub fn functional(ctx: &'a CacheTestContext) -> Self {
        Self {
            ctx,
            mode: TestMode::Functional,
        }
    }

    /// Integration-mode assertions: every target must name its controller.
    pub fn integration(ctx: &'a CacheTestContext) -> Self {
        Self {
            ctx,
            mode: TestMode::Integration,
        }
    }

    pub fn mode(&self) -> TestMode {
        self.mode
    }

    /// Asserts that executing `block` caches every named fragment.
    pub fn assert_cache_fragments<F>(
        &self,
        targets: &[ActionRef],
        block: F,
    ) -> Result<(), HarnessError>
    where
        F: FnOnce(&[ActionRef]),
    {
        self.assert_fragment_like(targets, block, KeyKind::Fragment, Expect::Written)
    }

    /// Asserts that executing `block` expires every named fragment.
    pub fn assert_expire_fragments<F>(
        &self,
        targets: &[ActionRef],
        block: F,
    ) -> Result<(), HarnessError>
    where
        F: FnOnce(&[ActionRef]),
    {
        self.assert_fragment_like(targets, block, KeyKind::Fragment, Expect::Deleted)
    }

    /// Asserts that executing `block` caches every referenced action.
    pub fn assert_cache_actions<F>(
        &self,
        targets: &[ActionRef],
        block: F,
    ) -> Result<(), HarnessError>
    where
        F: FnOnce(&[ActionRef]),
    {
        self.assert_fragment_like(targets, block, KeyKind::Action, Expect::Written)
    }

    /// Asserts that executing `block` expires every referenced action.
    pub fn assert_expire_actions<F>(
        &self,
        targets: &[ActionRef],
        block: F,
    ) -> Result<(), HarnessError>
    where
        F: FnOnce(&[ActionRef]),
    {
        self.assert_fragment_like(targets, block, KeyKind::Action, Expect::Deleted)
    }

    /// Asserts that the given pages get cached. With no block of its own, it
    /// issues a plain retrieval per path through the installed request driver.
    pub fn assert_cache_pages(&self, paths: &[&str]) -> Result<(), HarnessError> {
        let driver = self
            .ctx
            .request_driver()
            .ok_or(HarnessError::MissingRequestDriver)?;

        self.ctx.pages().reset();

        for path in paths {
            driver
                .get(self.ctx, path)
                .map_err(|source| HarnessError::RequestFailed {
                    path: (*path).to_string(),
                    source: source.into(),
                })?;
        }

        self.verify_pages(paths, Expect::Written)
    }

    /// Page-cache assertion with an explicit block triggering the requests.
    pub fn assert_cache_pages_with<F>(&self, paths: &[&str], block: F) -> Result<(), HarnessError>
    where
        F: FnOnce(&[&str]),
    {
        self.ctx.pages().reset();
        block(paths);
        self.verify_pages(paths, Expect::Written)
    }

    /// Asserts that executing `block` expires every given page. Expiry is
    /// triggered by some other action, never by re-fetching the page, so the
    /// block is mandatory here.
    pub fn assert_expire_pages<F>(&self, paths: &[&str], block: F) -> Result<(), HarnessError>
    where
        F: FnOnce(&[&str]),
    {
        self.ctx.pages().reset();
        block(paths);
        self.verify_pages(paths, Expect::Deleted)
    }

    fn assert_fragment_like<F>(
        &self,
        targets: &[ActionRef],
        block: F,
        kind: KeyKind,
        expect: Expect,
    ) -> Result<(), HarnessError>
    where
        F: FnOnce(&[ActionRef]),
    {
        if self.mode == TestMode::Integration {
            self.check_targets_have_controller(targets)?;
        }

        self.ctx.clear_controller();
        self.ctx.store().reset();

        block(targets);

        // no controller after the block means no request ran
        let controller = self
            .ctx
            .controller()
            .ok_or(HarnessError::NoRequestInBlock)?;

        for target in targets {
            let key = derive_key(&controller, target, kind);
            self.verify_key(&key, target, expect)?;
        }
        Ok(())
    }

    fn verify_key(
        &self,
        key: &CacheKey,
        target: &ActionRef,
        expect: Expect,
    ) -> Result<(), HarnessError> {
        let store = self.ctx.store();
        let ok = match expect {
            Expect::Written => store.written(key),
            Expect::Deleted => store.deleted(key),
        };
        if !ok {
            return Err(match expect {
                Expect::Written => HarnessError::NotCached {
                    target: target.to_string(),
                },
                Expect::Deleted => HarnessError::NotExpired {
                    target: target.to_string(),
                },
            });
        }
        debug!(
            component = "harness",
            event = "target_verified",
            key = %key,
            "target verified"
        );
        Ok(())
    }

    fn verify_pages(&self, paths: &[&str], expect: Expect) -> Result<(), HarnessError> {
        let pages = self.ctx.pages();
        for path in paths {
            let ok = match expect {
                Expect::Written => pages.cached(path),
                Expect::Deleted => pages.expired(path),
            };
            if !ok {
                let target = canonical_path(path).to_string();
                return Err(match expect {
                    Expect::Written => HarnessError::NotCached { target },
                    Expect::Deleted => HarnessError::NotExpired { target },
                });
            }
        }
        Ok(())
    }

    fn check_targets_have_controller(&self, targets: &[ActionRef]) -> Result<(), HarnessError> {
        match targets.iter().find(|target| !target.has_controller()) {
            Some(target) => Err(HarnessError::NoControllerInTarget(target.clone())),
            None => Ok(()),
        }
    }
}

fn derive_key(controller: &ControllerContext, target: &ActionRef, kind: KeyKind) -> CacheKey {
    match kind {
        KeyKind::Fragment => controller.fragment_cache_key(target),
        KeyKind::Action => controller.action_cache_key(target),
    }
}
