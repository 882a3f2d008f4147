use core::fmt;

use crate::compress::H0;

/// Digest size in bytes.
pub const DIGEST_LEN: usize = 32;

/// The eight-word chaining value `H0..H7`.
///
/// Starts at [`H0`], is updated in place by every block compression, and after
/// the final padding block *is* the digest (see [`HashState::to_bytes`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashState([u32; 8]);

impl HashState {
  /// The SHA-256 initial hash value.
  #[inline]
  #[must_use]
  pub const fn initial() -> Self {
    Self(H0)
  }

  #[inline]
  #[must_use]
  pub const fn from_words(words: [u32; 8]) -> Self {
    Self(words)
  }

  #[inline]
  #[must_use]
  pub const fn words(&self) -> [u32; 8] {
    self.0
  }

  #[inline]
  pub(crate) fn words_mut(&mut self) -> &mut [u32; 8] {
    &mut self.0
  }

  /// Serialize `H0..H7`, each word big-endian.
  #[must_use]
  pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    let (chunks, _) = out.as_chunks_mut::<4>();
    for (dst, word) in chunks.iter_mut().zip(self.0) {
      *dst = word.to_be_bytes();
    }
    out
  }
}

impl Default for HashState {
  #[inline]
  fn default() -> Self {
    Self::initial()
  }
}

impl fmt::Debug for HashState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("HashState(")?;
    for (i, word) in self.0.iter().enumerate() {
      if i != 0 {
        f.write_str(" ")?;
      }
      write!(f, "{word:08x}")?;
    }
    f.write_str(")")
  }
}
