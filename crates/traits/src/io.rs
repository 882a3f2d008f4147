//! `std::io` adapters.
//!
//! - [`DigestReader`] / [`DigestWriter`] hash bytes as they pass through a
//!   [`Read`] or [`Write`], counting only the bytes actually transferred.
//! - [`ReadSource`] turns any [`Read`] into a [`ByteSource`], hiding short
//!   reads so that only true end of input looks like exhaustion.

use std::io::{self, ErrorKind, IoSlice, IoSliceMut, Read, Write};

use crate::{ByteSource, Digest};

// ─────────────────────────────────────────────────────────────────────────────
// Byte Source Adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Adapts a [`Read`] into a [`ByteSource`].
///
/// `Read::read` may return fewer bytes than requested long before end of
/// input. `fill` keeps reading until the buffer is full or the reader returns
/// `Ok(0)`, retrying [`ErrorKind::Interrupted`].
#[derive(Debug)]
pub struct ReadSource<R> {
  inner: R,
  bytes_read: u64,
}

impl<R> ReadSource<R> {
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, bytes_read: 0 }
  }

  /// Total bytes delivered through [`ByteSource::fill`] so far.
  #[inline]
  #[must_use]
  pub fn bytes_read(&self) -> u64 {
    self.bytes_read
  }

  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }
}

impl<R: Read> ByteSource for ReadSource<R> {
  type Error = io::Error;

  fn fill(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while let Some(rest) = buf.get_mut(filled..) {
      if rest.is_empty() {
        break;
      }
      match self.inner.read(rest) {
        Ok(0) => break,
        Ok(n) => filled += n,
        Err(err) if err.kind() == ErrorKind::Interrupted => continue,
        Err(err) => return Err(err),
      }
    }
    self.bytes_read = self.bytes_read.wrapping_add(filled as u64);
    Ok(filled)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Digest I/O Adapters
// ─────────────────────────────────────────────────────────────────────────────

/// Wraps a [`Read`] and computes a digest transparently.
///
/// All reads from this type pass through to the inner reader while
/// updating the digest with the actual bytes read (handling short reads).
#[derive(Clone)]
pub struct DigestReader<R, D: Digest> {
  inner: R,
  hasher: D,
}

impl<R, D: Digest> DigestReader<R, D> {
  /// Create a new reader wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: D::new() }
  }

  /// Digest of everything read so far.
  ///
  /// Further reads keep updating the digest.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  #[inline]
  pub fn hasher(&self) -> &D {
    &self.hasher
  }

  /// Unwrap this `DigestReader`, returning the inner reader and the final digest.
  #[inline]
  pub fn into_parts(self) -> (R, D::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }
}

impl<R: Read, D: Digest> Read for DigestReader<R, D> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let n = self.inner.read(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  fn read_vectored(&mut self, bufs: &mut [IoSliceMut<'_>]) -> io::Result<usize> {
    let n = self.inner.read_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs.iter() {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if let Some(data) = buf.get(..take) {
        self.hasher.update(data);
      }
      remaining -= take;
    }
    Ok(n)
  }
}

/// Wraps a [`Write`] and computes a digest transparently.
///
/// Only the prefix the inner writer accepted is hashed, so a short write
/// followed by a retry of the remainder (as `write_all` does) hashes every
/// byte exactly once.
#[derive(Clone)]
pub struct DigestWriter<W, D: Digest> {
  inner: W,
  hasher: D,
}

impl<W, D: Digest> DigestWriter<W, D> {
  /// Create a new writer wrapper with the default initial state.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: D::new() }
  }

  /// Digest of everything written so far.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> D::Output {
    self.hasher.finalize()
  }

  /// Unwrap this `DigestWriter`, returning the inner writer and the final digest.
  #[inline]
  pub fn into_parts(self) -> (W, D::Output) {
    let digest = self.hasher.finalize();
    (self.inner, digest)
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }
}

impl<W: Write, D: Digest> Write for DigestWriter<W, D> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    let n = self.inner.write(buf)?;
    if let Some(data) = buf.get(..n) {
      self.hasher.update(data);
    }
    Ok(n)
  }

  #[inline]
  fn flush(&mut self) -> io::Result<()> {
    self.inner.flush()
  }

  fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> io::Result<usize> {
    let n = self.inner.write_vectored(bufs)?;
    let mut remaining = n;
    for buf in bufs {
      if remaining == 0 {
        break;
      }
      let take = remaining.min(buf.len());
      if let Some(data) = buf.get(..take) {
        self.hasher.update(data);
      }
      remaining -= take;
    }
    Ok(n)
  }
}
