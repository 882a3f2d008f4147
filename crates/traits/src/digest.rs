//! Cryptographic digest trait.
//!
//! A hasher owns its whole in-progress computation: the chaining value, any
//! partial block, and the running length. Two hashers never share state, so
//! independent inputs can be hashed side by side without coordination.

use core::fmt::Debug;

use crate::VerificationError;

/// Cryptographic hash function producing a fixed-size digest.
pub trait Digest: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug;

  /// Create a new hasher in its initial state.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  ///
  /// The result of [`finalize`](Self::finalize) never depends on how the
  /// input was split across calls.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Finalize and return the digest.
  ///
  /// This method does not consume the hasher, allowing further updates if needed.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Finalize, then reset so the hasher can start a new message.
  #[inline]
  #[must_use]
  fn finalize_reset(&mut self) -> Self::Output {
    let out = self.finalize();
    self.reset();
    out
  }

  /// Finalize and compare against `expected`.
  ///
  /// All bytes are compared even after a difference is found.
  fn verify(&self, expected: &Self::Output) -> Result<(), VerificationError>
  where
    Self::Output: AsRef<[u8]>,
  {
    let computed = self.finalize();
    let (computed, expected) = (computed.as_ref(), expected.as_ref());
    if computed.len() != expected.len() {
      return Err(VerificationError::new());
    }
    let diff = computed.iter().zip(expected).fold(0u8, |acc, (a, b)| acc | (a ^ b));
    if core::hint::black_box(diff) == 0 { Ok(()) } else { Err(VerificationError::new()) }
  }

  /// Compute the digest of data in one shot.
  #[inline]
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Compute the digest of multiple buffers in one shot.
  #[inline]
  #[must_use]
  fn digest_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }

  /// Wrap a reader to compute the digest of everything read through it.
  ///
  /// # Example
  ///
  /// ```rust
  /// # use traits::Digest;
  /// # #[derive(Clone, Default)]
  /// # struct XorDigest(u8);
  /// # impl Digest for XorDigest {
  /// #   const OUTPUT_SIZE: usize = 1;
  /// #   type Output = [u8; 1];
  /// #   fn new() -> Self { Self(0) }
  /// #   fn update(&mut self, data: &[u8]) { self.0 = data.iter().fold(self.0, |acc, &b| acc ^ b); }
  /// #   fn finalize(&self) -> Self::Output { [self.0] }
  /// #   fn reset(&mut self) { self.0 = 0; }
  /// # }
  /// use std::io::Cursor;
  ///
  /// let mut reader = XorDigest::reader(Cursor::new(b"abc".to_vec()));
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// assert_eq!(reader.digest(), [b'a' ^ b'b' ^ b'c']);
  /// # Ok::<(), std::io::Error>(())
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::DigestReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::DigestReader::new(inner)
  }

  /// Wrap a writer to compute the digest of everything written through it.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::DigestWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::DigestWriter::new(inner)
  }
}
