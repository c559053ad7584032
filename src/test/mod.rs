
use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TEST_SETUP: Once = Once::new();

/// Installs a global subscriber so `tracing` output shows up in failing
/// tests. Filtered by `RUST_LOG`, defaulting to `debug`.
pub(crate) fn init_test_logging() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .with_filter(env_filter),
        );

        if subscriber.try_init().is_err() {
            eprintln!("Tracing subscriber already set");
        }
    });
}
