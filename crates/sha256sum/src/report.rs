//! Fixed-width hash-state tables.
//!
//! ```text
//! -----------------------------------------------------------------------------------------
//! | Final Hash                                                                            |
//! -----------------------------------------------------------------------------------------
//! |   H[0]   |   H[1]   |   H[2]   |   H[3]   |   H[4]   |   H[5]   |   H[6]   |   H[7]   |
//! | ba7816bf | 8f01cfea | 414140de | 5dae2223 | b00361a3 | 96177a9c | b410ff61 | f20015ad |
//! -----------------------------------------------------------------------------------------
//! ```

use std::{
  fmt,
  io::{self, Write},
};

use sha256::{BlockObserver, HashState};

const RULE: &str = "-----------------------------------------------------------------------------------------";
const TITLE_WIDTH: usize = RULE.len() - 4;

/// One titled table of `H[0]..H[7]`.
pub struct StateTable<'a> {
  pub title: &'a str,
  pub state: &'a HashState,
}

impl fmt::Display for StateTable<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{RULE}")?;
    writeln!(f, "| {:<TITLE_WIDTH$} |", self.title)?;
    writeln!(f, "{RULE}")?;
    for i in 0..8 {
      write!(f, "|   H[{i}]   ")?;
    }
    writeln!(f, "|")?;
    for word in self.state.words() {
      write!(f, "| {word:08x} ")?;
    }
    writeln!(f, "|")?;
    writeln!(f, "{RULE}")
  }
}

/// Writes tables as the framer reports blocks.
///
/// Observer callbacks cannot fail, so the first write error is held until
/// [`Diagnostics::finish`].
pub struct Diagnostics<'w, W: Write> {
  out: &'w mut W,
  trace_blocks: bool,
  show_state: bool,
  blocks: u64,
  error: Option<io::Error>,
}

impl<'w, W: Write> Diagnostics<'w, W> {
  pub fn new(out: &'w mut W, trace_blocks: bool, show_state: bool) -> Self {
    Self { out, trace_blocks, show_state, blocks: 0, error: None }
  }

  fn emit(&mut self, table: StateTable<'_>) {
    if self.error.is_none()
      && let Err(err) = write!(self.out, "{table}")
    {
      self.error = Some(err);
    }
  }

  /// Number of blocks compressed, padding included.
  pub fn blocks(&self) -> u64 {
    self.blocks
  }

  pub fn finish(self) -> io::Result<u64> {
    match self.error {
      Some(err) => Err(err),
      None => Ok(self.blocks),
    }
  }
}

impl<W: Write> BlockObserver for Diagnostics<'_, W> {
  fn on_block(&mut self, index: u64, state: &HashState) {
    self.blocks = index + 1;
    tracing::trace!(block = index, ?state, "compressed");
    if self.trace_blocks {
      let title = format!("Block {index}");
      self.emit(StateTable { title: &title, state });
    }
  }

  fn on_finish(&mut self, state: &HashState, bit_len: u64) {
    tracing::debug!(blocks = self.blocks, bit_len, "finalized");
    if self.show_state {
      self.emit(StateTable { title: "Final Hash", state });
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_layout_is_fixed_width() {
    let state = HashState::from_words([
      0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61, 0xf20015ad,
    ]);
    let text = StateTable { title: "Final Hash", state: &state }.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6);
    assert!(lines.iter().all(|l| l.len() == 89), "{text}");
    assert_eq!(lines[0], RULE);
    assert!(lines[1].starts_with("| Final Hash "));
    assert!(lines[1].ends_with(" |"));
    assert_eq!(
      lines[3],
      "|   H[0]   |   H[1]   |   H[2]   |   H[3]   |   H[4]   |   H[5]   |   H[6]   |   H[7]   |"
    );
    assert_eq!(
      lines[4],
      "| ba7816bf | 8f01cfea | 414140de | 5dae2223 | b00361a3 | 96177a9c | b410ff61 | f20015ad |"
    );
    assert_eq!(lines[5], RULE);
  }

  #[test]
  fn diagnostics_trace_every_block_then_final() {
    let mut out = Vec::new();
    let mut diag = Diagnostics::new(&mut out, true, true);
    sha256::digest_source_observed(&[0u8; 100][..], &mut diag).unwrap();
    assert_eq!(diag.finish().unwrap(), 2);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("| Block 0 "));
    assert!(text.contains("| Block 1 "));
    assert!(!text.contains("| Block 2 "));
    assert!(text.contains("| Final Hash "));
    assert_eq!(text.lines().count(), 18);
  }

  #[test]
  fn quiet_diagnostics_write_nothing() {
    let mut out = Vec::new();
    let mut diag = Diagnostics::new(&mut out, false, false);
    sha256::digest_source_observed(&b"abc"[..], &mut diag).unwrap();
    assert_eq!(diag.blocks(), 1);
    assert_eq!(diag.finish().unwrap(), 1);
    assert!(out.is_empty());
  }
}
