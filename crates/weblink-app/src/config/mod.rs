pub use weblink_core::config::*;

use crate::cli::Cli;

/// How parsed links are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub include_prefix: bool,
}

/// ## Summary
/// Combines the configured output settings with command-line overrides.
#[must_use]
pub fn resolve_output(settings: &Settings, cli: &Cli) -> RenderOptions {
    RenderOptions {
        format: cli.format.unwrap_or(settings.output.format),
        include_prefix: settings.output.include_prefix && !cli.no_prefix,
    }
}
