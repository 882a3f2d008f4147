//! Command-line arguments and the validated run configuration.

use std::path::{Path, PathBuf};

use clap::Parser;
use sha256::{DIGEST_LEN, hex};

use crate::error::{CliError, Result};

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Print or check SHA-256 digests of files.
#[derive(Parser, Debug, Clone)]
#[command(name = "sha256sum", version, about)]
pub struct Args {
  /// Files to hash; `-` reads standard input
  #[arg(value_name = "FILE", required = true)]
  pub files: Vec<PathBuf>,

  /// Expected digest (64 hex characters) for a single input
  #[arg(long, value_name = "HEX", env = "SHA256SUM_CHECK")]
  pub check: Option<String>,

  /// Print the final hash state H[0]..H[7] as a table
  #[arg(long)]
  pub state: bool,

  /// Print the hash state after every compressed block
  #[arg(long)]
  pub trace_blocks: bool,

  /// Enable debug logging (RUST_LOG takes precedence)
  #[arg(short, long)]
  pub verbose: bool,
}

/// Validated configuration for [`crate::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub inputs: Vec<PathBuf>,
  pub expected: Option<[u8; DIGEST_LEN]>,
  pub show_state: bool,
  pub trace_blocks: bool,
}

impl Config {
  pub fn from_args(args: Args) -> Result<Self> {
    let expected = match args.check.as_deref() {
      Some(text) => {
        if args.files.len() != 1 {
          return Err(CliError::CheckNeedsSingleInput(args.files.len()));
        }
        Some(hex::decode(text.trim())?)
      }
      None => None,
    };

    Ok(Self { inputs: args.files, expected, show_state: args.state, trace_blocks: args.trace_blocks })
  }
}

pub fn is_stdin(path: &Path) -> bool {
  path.as_os_str() == STDIN_PATH
}

#[cfg(test)]
mod tests {
  use super::*;

  const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

  fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("sha256sum").chain(argv.iter().copied())).unwrap()
  }

  #[test]
  fn plain_paths() {
    let config = Config::from_args(parse(&["a.bin", "-"])).unwrap();
    assert_eq!(config.inputs, [PathBuf::from("a.bin"), PathBuf::from("-")]);
    assert_eq!(config.expected, None);
    assert!(!config.show_state);
    assert!(is_stdin(&config.inputs[1]));
    assert!(!is_stdin(&config.inputs[0]));
  }

  #[test]
  fn check_decodes_expected_digest() {
    let config = Config::from_args(parse(&["--check", ABC, "--state", "a.txt"])).unwrap();
    assert_eq!(config.expected, Some(sha256::digest(b"abc")));
    assert!(config.show_state);
  }

  #[test]
  fn check_requires_exactly_one_input() {
    let err = Config::from_args(parse(&["--check", ABC, "a", "b"])).unwrap_err();
    assert!(matches!(err, CliError::CheckNeedsSingleInput(2)));
  }

  #[test]
  fn check_rejects_malformed_hex() {
    let err = Config::from_args(parse(&["--check", "xyz", "a"])).unwrap_err();
    assert!(matches!(err, CliError::InvalidCheck(_)));
  }

  #[test]
  fn at_least_one_file_is_required() {
    assert!(Args::try_parse_from(["sha256sum"]).is_err());
  }
}
