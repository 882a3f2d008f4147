#![allow(clippy::indexing_slicing)] // Partial-block buffer bookkeeping

use traits::Digest;

use crate::{
  compress::{BLOCK_LEN, compress, compress_blocks},
  framer::pad_and_compress,
  state::{DIGEST_LEN, HashState},
};

/// Incremental SHA-256.
///
/// Push-style counterpart of [`crate::digest_source`]: bytes arrive through
/// [`Digest::update`] in any split, and at most one partial block is buffered.
#[derive(Clone)]
pub struct Sha256 {
  state: HashState,
  block: [u8; BLOCK_LEN],
  block_len: usize,
  bytes_hashed: u64,
}

impl Default for Sha256 {
  #[inline]
  fn default() -> Self {
    Self {
      state: HashState::initial(),
      block: [0u8; BLOCK_LEN],
      block_len: 0,
      bytes_hashed: 0,
    }
  }
}

impl core::fmt::Debug for Sha256 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Sha256")
      .field("state", &self.state)
      .field("buffered", &self.block_len)
      .field("bytes_hashed", &self.bytes_hashed)
      .finish()
  }
}

impl Sha256 {
  /// Chaining value after the last whole block; buffered bytes are not included.
  #[inline]
  #[must_use]
  pub fn state(&self) -> HashState {
    self.state
  }

  /// Total bytes passed to `update`, buffered ones included.
  #[inline]
  #[must_use]
  pub fn bytes_hashed(&self) -> u64 {
    self.bytes_hashed.wrapping_add(self.block_len as u64)
  }

  #[inline]
  fn update_block(&mut self, block: &[u8; BLOCK_LEN]) {
    compress(&mut self.state, block);
    self.bytes_hashed = self.bytes_hashed.wrapping_add(BLOCK_LEN as u64);
  }
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = DIGEST_LEN;
  type Output = [u8; DIGEST_LEN];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  fn update(&mut self, mut data: &[u8]) {
    if data.is_empty() {
      return;
    }

    if self.block_len != 0 {
      let take = core::cmp::min(BLOCK_LEN - self.block_len, data.len());
      self.block[self.block_len..self.block_len + take].copy_from_slice(&data[..take]);
      self.block_len += take;
      data = &data[take..];

      if self.block_len < BLOCK_LEN {
        return;
      }
      let block = self.block;
      self.update_block(&block);
      self.block_len = 0;
    }

    let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
    if !blocks.is_empty() {
      compress_blocks(&mut self.state, blocks);
      self.bytes_hashed = self.bytes_hashed.wrapping_add((blocks.len() * BLOCK_LEN) as u64);
    }

    self.block[..rest.len()].copy_from_slice(rest);
    self.block_len = rest.len();
  }

  fn finalize(&self) -> Self::Output {
    let mut state = self.state;
    let bit_len = self.bytes_hashed().wrapping_mul(8);
    pad_and_compress(&mut state, &self.block[..self.block_len], bit_len, |_| {});
    state.to_bytes()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::default();
  }
}
