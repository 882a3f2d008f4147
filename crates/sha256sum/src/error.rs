//! Error types for the CLI.

use std::{io, path::PathBuf};

use sha256::{ParseDigestError, VerificationError};
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI errors.
#[derive(Error, Debug)]
pub enum CliError {
  /// Input could not be opened; the engine never ran.
  #[error("{}: {source}", .path.display())]
  SourceUnavailable {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Input failed mid-stream; the partial digest was discarded.
  #[error("{}: read failed: {source}", .path.display())]
  ReadFailed {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  /// Digest differs from `--check`.
  #[error("{}: FAILED ({source})", .path.display())]
  Mismatch {
    path: PathBuf,
    #[source]
    source: VerificationError,
  },

  /// `--check` value is not a digest.
  #[error("invalid --check digest: {0}")]
  InvalidCheck(#[from] ParseDigestError),

  /// `--check` names one digest, so it needs exactly one input.
  #[error("--check takes exactly one input, got {0}")]
  CheckNeedsSingleInput(usize),

  /// Writing digests or tables failed.
  #[error("failed to write output: {0}")]
  Output(#[from] io::Error),
}

impl CliError {
  /// Whether this error concerns one input, leaving the others processable.
  pub fn is_per_input(&self) -> bool {
    matches!(self, Self::SourceUnavailable { .. } | Self::ReadFailed { .. } | Self::Mismatch { .. })
  }
}
