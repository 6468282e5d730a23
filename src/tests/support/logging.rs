// Test logging setup.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a tracing subscriber once for the whole test binary.
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::prelude::*;
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_test_writer())
            .init();
    });
}
