//! Stream framing: block accumulation, padding, and length trailer.
//!
//! The framer owns one 64-byte buffer, the running [`HashState`], and a
//! 64-bit bit counter. It never holds more than one block of input.
//!
//! ```text
//! accumulate:  fill 64 ─┬─ full  → compress, count 512 bits, repeat
//!                       └─ short (r bytes, 0 ≤ r ≤ 63) → pad
//! pad:         data[..r] || 0x80 || 0x00.. || be64(bit_len)
//!              r + 1 ≤ 56 → one block
//!              r + 1 > 56 → data || 0x80 || zeros, then zeros || be64(bit_len)
//! finalize:    H0..H7 big-endian
//! ```
//!
//! Bit lengths of 2^64 and beyond are outside SHA-256's domain; the counter
//! wraps rather than panicking.

#![allow(clippy::indexing_slicing)] // Fixed-size block buffer offsets

use traits::ByteSource;

use crate::{
  compress::{BLOCK_LEN, compress},
  state::{DIGEST_LEN, HashState},
};

/// Offset of the big-endian bit-length field in the final block.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

const BLOCK_BITS: u64 = (BLOCK_LEN as u64) * 8;

/// Receives the chaining value after each block compression.
///
/// Used for diagnostics; neither method can influence the digest.
pub trait BlockObserver {
  /// Called after block `index` (0-based, padding blocks included) is compressed.
  #[inline]
  fn on_block(&mut self, index: u64, state: &HashState) {
    let _ = (index, state);
  }

  /// Called once with the final state and the message length in bits.
  #[inline]
  fn on_finish(&mut self, state: &HashState, bit_len: u64) {
    let _ = (state, bit_len);
  }
}

impl BlockObserver for () {}

impl<O: BlockObserver + ?Sized> BlockObserver for &mut O {
  #[inline]
  fn on_block(&mut self, index: u64, state: &HashState) {
    (**self).on_block(index, state);
  }

  #[inline]
  fn on_finish(&mut self, state: &HashState, bit_len: u64) {
    (**self).on_finish(state, bit_len);
  }
}

/// Append the padding trailer to a partial block and compress it.
///
/// `tail` is the input left over after the last whole block and `bit_len` the
/// total message length in bits (tail included). Returns the number of
/// padding blocks compressed: 1 when `tail.len() + 1 <= 56`, otherwise 2.
/// `on_block` runs after each of them.
///
/// # Panics
///
/// If `tail` is a whole block or longer. Callers compress full blocks before
/// padding, so this only fires on a framing bug.
pub fn pad_and_compress(
  state: &mut HashState,
  tail: &[u8],
  bit_len: u64,
  mut on_block: impl FnMut(&HashState),
) -> usize {
  let r = tail.len();
  assert!(r < BLOCK_LEN, "padding tail must be shorter than one block, got {r} bytes");

  let mut block = [0u8; BLOCK_LEN];
  block[..r].copy_from_slice(tail);
  block[r] = 0x80;

  let mut blocks = 1;
  if r + 1 > LENGTH_OFFSET {
    compress(state, &block);
    on_block(&*state);
    block = [0u8; BLOCK_LEN];
    blocks = 2;
  }

  block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
  compress(state, &block);
  on_block(&*state);
  blocks
}

/// Digest everything `source` yields, reporting each block to `observer`.
///
/// Source errors abort the computation and are returned unchanged; the
/// partial state is discarded.
pub fn digest_source_observed<S, O>(mut source: S, mut observer: O) -> Result<[u8; DIGEST_LEN], S::Error>
where
  S: ByteSource,
  O: BlockObserver,
{
  let mut state = HashState::initial();
  let mut block = [0u8; BLOCK_LEN];
  let mut bit_len: u64 = 0;
  let mut index: u64 = 0;

  let tail_len = loop {
    let n = source.fill(&mut block)?;
    if n < BLOCK_LEN {
      break n;
    }
    bit_len = bit_len.wrapping_add(BLOCK_BITS);
    compress(&mut state, &block);
    observer.on_block(index, &state);
    index += 1;
  };

  bit_len = bit_len.wrapping_add((tail_len as u64) * 8);
  pad_and_compress(&mut state, &block[..tail_len], bit_len, |s| {
    observer.on_block(index, s);
    index += 1;
  });
  observer.on_finish(&state, bit_len);

  Ok(state.to_bytes())
}

/// Digest everything `source` yields.
#[inline]
pub fn digest_source<S: ByteSource>(source: S) -> Result<[u8; DIGEST_LEN], S::Error> {
  digest_source_observed(source, ())
}

/// Digest an in-memory buffer.
#[must_use]
pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
  match digest_source::<&[u8]>(data) {
    Ok(out) => out,
    Err(never) => match never {},
  }
}

/// Digest a reader to end of input.
///
/// Short reads are not mistaken for end of input; see [`traits::io::ReadSource`].
#[cfg(feature = "std")]
pub fn digest_reader<R: std::io::Read>(reader: R) -> std::io::Result<[u8; DIGEST_LEN]> {
  digest_source(traits::io::ReadSource::new(reader))
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::{vec, vec::Vec};

  use super::*;

  #[derive(Default)]
  struct Recorder {
    blocks: Vec<(u64, HashState)>,
    finish: Option<(HashState, u64)>,
  }

  impl BlockObserver for Recorder {
    fn on_block(&mut self, index: u64, state: &HashState) {
      self.blocks.push((index, *state));
    }

    fn on_finish(&mut self, state: &HashState, bit_len: u64) {
      self.finish = Some((*state, bit_len));
    }
  }

  fn blocks_for(len: usize) -> Recorder {
    let data = vec![0x5au8; len];
    let mut rec = Recorder::default();
    digest_source_observed(&data[..], &mut rec).unwrap();
    rec
  }

  #[test]
  fn empty_input_is_one_padding_block() {
    let rec = blocks_for(0);
    assert_eq!(rec.blocks.len(), 1);
    let (state, bit_len) = rec.finish.unwrap();
    assert_eq!(bit_len, 0);
    assert_eq!(
      state.words(),
      [0xe3b0c442, 0x98fc1c14, 0x9afbf4c8, 0x996fb924, 0x27ae41e4, 0x649b934c, 0xa495991b, 0x7852b855]
    );
  }

  #[test]
  fn padding_boundary_is_inclusive_at_55() {
    // r + 1 <= 56 fits the trailer in the same block.
    assert_eq!(blocks_for(55).blocks.len(), 1);
    assert_eq!(blocks_for(56).blocks.len(), 2);
    assert_eq!(blocks_for(57).blocks.len(), 2);
    assert_eq!(blocks_for(63).blocks.len(), 2);
  }

  #[test]
  fn whole_block_input_still_gets_padding_block() {
    assert_eq!(blocks_for(64).blocks.len(), 2);
    assert_eq!(blocks_for(128).blocks.len(), 3);
    assert_eq!(blocks_for(64 + 55).blocks.len(), 2);
    assert_eq!(blocks_for(64 + 56).blocks.len(), 3);
  }

  #[test]
  fn observer_sees_sequential_indices_and_bit_length() {
    let rec = blocks_for(200);
    let indices: Vec<u64> = rec.blocks.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, [0u64, 1, 2, 3]);
    let (final_state, bit_len) = rec.finish.unwrap();
    assert_eq!(bit_len, 1600);
    assert_eq!(rec.blocks.last().map(|(_, s)| *s), Some(final_state));
  }

  #[test]
  fn pad_and_compress_reports_block_count() {
    for r in 0..BLOCK_LEN {
      let tail = vec![0u8; r];
      let mut calls = 0;
      let mut state = HashState::initial();
      let blocks = pad_and_compress(&mut state, &tail, (r as u64) * 8, |_| calls += 1);
      let expected = if r + 1 <= 56 { 1 } else { 2 };
      assert_eq!(blocks, expected, "tail={r}");
      assert_eq!(calls, expected, "tail={r}");
    }
  }

  #[test]
  #[should_panic(expected = "padding tail must be shorter than one block")]
  fn pad_rejects_whole_block_tail() {
    let mut state = HashState::initial();
    pad_and_compress(&mut state, &[0u8; BLOCK_LEN], 512, |_| {});
  }

  #[test]
  fn source_error_is_propagated() {
    struct FailAfter(usize);
    impl ByteSource for FailAfter {
      type Error = &'static str;
      fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.0 == 0 {
          return Err("gone");
        }
        self.0 -= 1;
        buf.fill(0xaa);
        Ok(buf.len())
      }
    }

    assert_eq!(digest_source(FailAfter(3)), Err("gone"));
  }

  #[cfg(feature = "std")]
  #[test]
  fn digest_reader_matches_slice_digest() {
    let data: Vec<u8> = (0..1000u32).map(|i| (i * 7) as u8).collect();
    let from_reader = digest_reader(std::io::Cursor::new(&data)).unwrap();
    assert_eq!(from_reader, digest(&data));
  }
}
