//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};
use weblink_core::error::CoreError;

use crate::error::AppResult;

/// Filter used until configuration is loaded.
pub const DEFAULT_LEVEL: &str = "warn";

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// ## Summary
/// Installs the global subscriber, logging to stderr, and returns a handle for
/// changing the filter later.
#[must_use]
pub fn init_tracing(default_level: &str) -> FilterHandle {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    filter_handle
}

/// ## Summary
/// Replaces the active filter with `level`.
///
/// ## Errors
/// Returns an error if `level` is not a valid filter directive or the subscriber is gone.
pub fn set_level(handle: &FilterHandle, level: &str) -> AppResult<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|err| CoreError::ConfigError(format!("invalid log level {level:?}: {err}")))?;

    handle
        .modify(|current| *current = filter)
        .map_err(|err| CoreError::ConfigError(format!("failed to update log filter: {err}")))?;

    Ok(())
}
