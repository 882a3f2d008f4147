//! Hash every configured input and print the results.

use std::{
  fs::File,
  io::{self, BufReader, Read, Write},
  path::Path,
};

use sha256::{DIGEST_LEN, digest_source_observed, hex, io::ReadSource};
use tracing::{debug, info, warn};

use crate::{
  config::{Config, is_stdin},
  error::{CliError, Result},
  report::Diagnostics,
};

/// Read buffer between the OS and the 64-byte block source.
const READ_BUF_LEN: usize = 64 * 1024;

/// Digest one reader, writing any requested tables to `out`.
pub fn digest_reader_to<R: Read, W: Write>(
  reader: R,
  path: &Path,
  config: &Config,
  out: &mut W,
) -> Result<[u8; DIGEST_LEN]> {
  let mut diagnostics = Diagnostics::new(out, config.trace_blocks, config.show_state);
  let mut source = ReadSource::new(reader);
  let digest = digest_source_observed(&mut source, &mut diagnostics)
    .map_err(|err| CliError::ReadFailed { path: path.to_path_buf(), source: err })?;
  let blocks = diagnostics.finish()?;
  debug!(bytes = source.bytes_read(), blocks, "digested");
  Ok(digest)
}

/// Open `path` (or stdin for `-`) and digest it.
pub fn digest_path<W: Write>(path: &Path, config: &Config, out: &mut W) -> Result<[u8; DIGEST_LEN]> {
  if is_stdin(path) {
    return digest_reader_to(io::stdin().lock(), path, config, out);
  }

  let file = File::open(path).map_err(|source| CliError::SourceUnavailable { path: path.to_path_buf(), source })?;
  digest_reader_to(BufReader::with_capacity(READ_BUF_LEN, file), path, config, out)
}

fn process<W: Write>(path: &Path, config: &Config, out: &mut W) -> Result<()> {
  let digest = digest_path(path, config, out)?;
  writeln!(out, "{}  {}", hex::encode(&digest), path.display())?;

  if let Some(expected) = &config.expected {
    hex::verify(&digest, expected).map_err(|source| CliError::Mismatch { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), "digest verified");
  }
  Ok(())
}

/// Process every input in order, returning whether all of them succeeded.
///
/// A failing input is reported on stderr and skipped; output errors abort.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<bool> {
  let mut all_ok = true;

  for path in &config.inputs {
    let _span = tracing::debug_span!("input", path = %path.display()).entered();
    match process(path, config, out) {
      Ok(()) => {}
      Err(err) if err.is_per_input() => {
        warn!(error = %err, "input failed");
        eprintln!("sha256sum: {err}");
        all_ok = false;
      }
      Err(err) => return Err(err),
    }
  }

  Ok(all_ok)
}
