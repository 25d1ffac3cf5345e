//! Logging setup.
//!
//! `RUST_LOG` wins when set; otherwise only our own crate logs at info.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,soundwave=info";

pub(crate) fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
