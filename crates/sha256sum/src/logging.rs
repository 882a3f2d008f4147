//! Tracing setup for the CLI.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "sha256sum=info";
const VERBOSE_LOG_FILTER: &str = "sha256sum=debug";

/// Pick the log filter: `RUST_LOG` when set, otherwise the default for `verbose`.
pub fn env_filter(verbose: bool) -> EnvFilter {
  EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    EnvFilter::new(if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER })
  })
}

/// Initialize tracing to stderr; stdout carries digests only.
pub fn init_logging(verbose: bool) -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(env_filter(verbose))
    .with_target(false)
    .try_init()
    .map_err(|err| anyhow!("failed to initialize logging: {err}"))
}
