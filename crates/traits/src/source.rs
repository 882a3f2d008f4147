//! Ordered byte sources.

use core::convert::Infallible;

/// An ordered stream of bytes that yields chunks on demand.
///
/// A source signals exhaustion by filling fewer bytes than requested. A short
/// fill is final: once `fill` returns less than `buf.len()`, every later call
/// returns `Ok(0)`. Sources backed by transports that deliver partial reads
/// (pipes, sockets) must keep reading until the buffer is full or the
/// transport reports end of input, see [`io::ReadSource`](crate::io::ReadSource).
pub trait ByteSource {
  /// Failure reported by the underlying transport.
  type Error;

  /// Copy up to `buf.len()` bytes into `buf` and return how many were written.
  fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl ByteSource for &[u8] {
  type Error = Infallible;

  #[inline]
  fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
    let n = core::cmp::min(buf.len(), self.len());
    let (head, rest) = self.split_at(n);
    if let Some(dst) = buf.get_mut(..n) {
      dst.copy_from_slice(head);
    }
    *self = rest;
    Ok(n)
  }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
  type Error = S::Error;

  #[inline]
  fn fill(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
    (**self).fill(buf)
  }
}
