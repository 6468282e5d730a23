// Harness configuration loading and defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;


/// Harness configuration.
///
/// `perform_caching` mirrors the host framework's global caching switch; the
/// harness flips it on when a test context is created so the real caching
/// code paths execute instead of being skipped.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HarnessConfig {
    /// Whether framework caching code paths run at all.
    #[serde(default = "default_true")]
    pub perform_caching: bool,

    /// Runtime view of `perform_caching`, shared with framework glue.
    #[serde(skip)]
    pub atomic_perform_caching: Arc<AtomicBool>,

    /// Forward bulk deletes to the wrapped store instead of only observing
    /// them.
    #[serde(default)]
    pub forward_delete_matched: bool,

    /// Log level used when a test logger is installed.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            perform_caching: true,
            atomic_perform_caching: Arc::new(AtomicBool::new(true)),
            forward_delete_matched: false,
            log_level: default_log_level(),
        }
    }
}

impl HarnessConfig {
    /// Loads the configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read harness config from {:?}", path.as_ref()))?;
        Self::from_yaml(&raw)
    }

    /// Parses the configuration from YAML text.
    pub fn from_yaml(raw: &str) -> Result<Self> {
        let mut cfg: HarnessConfig =
            serde_yaml::from_str(raw).context("failed to parse harness config yaml")?;
        cfg.atomic_perform_caching = Arc::new(AtomicBool::new(cfg.perform_caching));
        Ok(cfg)
    }

    /// Enables caching code paths; called during context construction.
    pub fn enable_caching(&self) {
        self.atomic_perform_caching.store(true, Ordering::Relaxed);
    }

    pub fn caching_enabled(&self) -> bool {
        self.atomic_perform_caching.load(Ordering::Relaxed)
    }
}

/// Ready-made configuration for test suites.
pub fn new_test_config() -> HarnessConfig {
    HarnessConfig::default()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "debug".to_string()
}
