//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

static INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "warn";

/// Install a stderr `tracing` subscriber filtered by [`Config::log_filter`].
///
/// Safe to call more than once. If the embedding process already installed a
/// global subscriber, that one is kept.
pub fn init() {
    INIT.call_once(|| {
        let filter = Config::get()
            .log_filter
            .as_deref()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok();

        tracing::debug!(installed, "logging initialised");
    });
}
