use std::io;
use std::process::ExitCode;

use clap::Parser;
use weblink_app::cli::Cli;
use weblink_app::config::{load_config, resolve_output};
use weblink_app::logging::{DEFAULT_LEVEL, init_tracing, set_level};
use weblink_app::render::run;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let filter_handle = init_tracing(DEFAULT_LEVEL);

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    if let Err(e) = set_level(&filter_handle, level) {
        tracing::warn!(error = %e, "Keeping default log level");
    }

    let options = resolve_output(&config, &cli);

    let failures = run(
        &cli.links,
        io::stdin().lock(),
        &options,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    if failures > 0 {
        tracing::info!(failures, "Some links could not be parsed");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
