//! sha256sum: print or check SHA-256 digests.
//!
//! Usage:
//!   sha256sum FILE...
//!   sha256sum --check <HEX> FILE
//!   sha256sum --state --trace-blocks FILE

use std::{
  io::{self, Write},
  process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use sha256sum::{Args, Config, logging, run};

fn try_main(args: Args) -> Result<bool> {
  let config = Config::from_args(args).context("invalid arguments")?;
  tracing::debug!(inputs = config.inputs.len(), check = config.expected.is_some(), "starting");

  let stdout = io::stdout();
  let mut out = stdout.lock();
  let all_ok = run(&config, &mut out)?;
  out.flush().context("failed to flush stdout")?;
  Ok(all_ok)
}

fn main() -> ExitCode {
  let args = Args::parse();

  if let Err(err) = logging::init_logging(args.verbose) {
    eprintln!("sha256sum: {err:#}");
    return ExitCode::FAILURE;
  }

  match try_main(args) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(err) => {
      eprintln!("sha256sum: {err:#}");
      ExitCode::FAILURE
    }
  }
}
