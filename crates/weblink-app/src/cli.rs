use clap::Parser;
use weblink_core::config::OutputFormat;

/// Parse `mailto:` and `tel:` links and print them in canonical form.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "weblink", version, about)]
pub struct Cli {
    /// Links to parse. Read from stdin, one per line, when omitted.
    pub links: Vec<String>,

    /// Output format (text or json), overriding the configured one.
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Omit the scheme prefix from generated links.
    #[arg(long)]
    pub no_prefix: bool,

    /// Log filter directive, overriding the configured level.
    #[arg(long)]
    pub log_level: Option<String>,
}
