use tracing_subscriber::{fmt, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

/// Install the global subscriber. A filter that fails to parse falls back to
/// the default one. Calling this twice is harmless.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
