//! Error types for digest operations.
//!
//! Minimal, allocation-free error types. The digest engine itself has no
//! fallible operations; these cover the edges where digests meet text and
//! expectations.

use core::fmt;

/// Verification failed.
///
/// Returned when a computed digest does not equal an expected one.
/// Intentionally opaque: it carries no hint of where the inputs differ.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: &[u8; 32], expected: &[u8; 32]) -> Result<(), VerificationError> {
///   if computed == expected { Ok(()) } else { Err(VerificationError::new()) }
/// }
///
/// assert!(verify(&[0u8; 32], &[1u8; 32]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("digest verification failed")
  }
}

impl core::error::Error for VerificationError {}

/// Hex text could not be parsed into a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseDigestError {
  /// The text does not have exactly two hex characters per digest byte.
  InvalidLength {
    /// Required number of characters.
    expected: usize,
    /// Number of characters supplied.
    actual: usize,
  },
  /// A byte outside `[0-9a-fA-F]`.
  InvalidHexDigit {
    /// Offset of the offending byte in the input.
    index: usize,
    /// The offending byte.
    byte: u8,
  },
}

impl fmt::Display for ParseDigestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::InvalidLength { expected, actual } => {
        write!(f, "expected {expected} hex characters, found {actual}")
      }
      Self::InvalidHexDigit { index, byte } => {
        write!(f, "invalid hex digit {:?} at offset {index}", char::from(byte))
      }
    }
  }
}

impl core::error::Error for ParseDigestError {}
