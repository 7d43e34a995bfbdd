mod cli;
mod application;
mod domain;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Used when RUST_LOG is unset or blank
const DEFAULT_LOG_FILTER: &str = "smartnote=warn";

/// Build the log filter from the RUST_LOG value, if any.
/// A set RUST_LOG replaces the default entirely.
fn log_filter(rust_log: Option<&str>) -> Result<EnvFilter> {
    let directives = rust_log
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER);
    Ok(EnvFilter::try_new(directives)?)
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with rendered views
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(rust_log.as_deref())?)
        .init();

    let cli = Cli::parse();
    cli.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_when_unset_or_blank() {
        assert_eq!(log_filter(None).unwrap().to_string(), DEFAULT_LOG_FILTER);
        assert_eq!(log_filter(Some("  ")).unwrap().to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_rust_log_overrides_crate_level() {
        let filter = log_filter(Some("smartnote=debug")).unwrap().to_string();
        assert_eq!(filter, "smartnote=debug");
    }
}
