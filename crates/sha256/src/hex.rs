//! Text form of a digest: 64 lowercase hex characters, `H0` first.

use core::{fmt, ops::Deref};

use traits::{ParseDigestError, VerificationError};

use crate::state::DIGEST_LEN;

/// Length of the hex form of a digest.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// A digest rendered as lowercase hex, held on the stack.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexDigest([u8; HEX_LEN]);

impl HexDigest {
  #[inline]
  #[must_use]
  pub fn as_str(&self) -> &str {
    // Only ALPHABET bytes are ever stored.
    core::str::from_utf8(&self.0).unwrap_or_default()
  }
}

impl Deref for HexDigest {
  type Target = str;

  #[inline]
  fn deref(&self) -> &str {
    self.as_str()
  }
}

impl fmt::Display for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Debug for HexDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "HexDigest({})", self.as_str())
  }
}

/// Render a digest as lowercase hex.
#[must_use]
pub fn encode(digest: &[u8; DIGEST_LEN]) -> HexDigest {
  let mut out = [0u8; HEX_LEN];
  let (pairs, _) = out.as_chunks_mut::<2>();
  for (pair, &byte) in pairs.iter_mut().zip(digest) {
    for (slot, nibble) in pair.iter_mut().zip([byte >> 4, byte & 0x0f]) {
      if let Some(&c) = ALPHABET.get(usize::from(nibble)) {
        *slot = c;
      }
    }
  }
  HexDigest(out)
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
  match c {
    b'0'..=b'9' => Some(c - b'0'),
    b'a'..=b'f' => Some(c - b'a' + 10),
    b'A'..=b'F' => Some(c - b'A' + 10),
    _ => None,
  }
}

/// Parse 64 hex characters (either case) into a digest.
pub fn decode(text: &str) -> Result<[u8; DIGEST_LEN], ParseDigestError> {
  let bytes = text.as_bytes();
  if bytes.len() != HEX_LEN {
    return Err(ParseDigestError::InvalidLength { expected: HEX_LEN, actual: bytes.len() });
  }

  let mut out = [0u8; DIGEST_LEN];
  let (pairs, _) = bytes.as_chunks::<2>();
  for (i, (slot, &[hi, lo])) in out.iter_mut().zip(pairs).enumerate() {
    let hi = nibble(hi).ok_or(ParseDigestError::InvalidHexDigit { index: 2 * i, byte: hi })?;
    let lo = nibble(lo).ok_or(ParseDigestError::InvalidHexDigit { index: 2 * i + 1, byte: lo })?;
    *slot = (hi << 4) | lo;
  }
  Ok(out)
}

/// Compare a computed digest against an expected one.
///
/// Every byte is examined regardless of where the first difference is.
pub fn verify(computed: &[u8; DIGEST_LEN], expected: &[u8; DIGEST_LEN]) -> Result<(), VerificationError> {
  let diff = computed.iter().zip(expected).fold(0u8, |acc, (a, b)| acc | (a ^ b));
  if core::hint::black_box(diff) == 0 { Ok(()) } else { Err(VerificationError::new()) }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::String;

  use super::*;
  use crate::digest;

  const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

  #[test]
  fn encodes_lowercase_in_word_order() {
    let hex = encode(&digest(b"abc"));
    assert_eq!(hex.as_str(), ABC);
    assert_eq!(hex.len(), HEX_LEN);
  }

  #[test]
  fn decode_accepts_either_case() {
    let lower = decode(ABC).unwrap();
    let upper = decode(&ABC.to_ascii_uppercase()).unwrap();
    assert_eq!(lower, digest(b"abc"));
    assert_eq!(lower, upper);
  }

  #[test]
  fn decode_rejects_wrong_length() {
    assert_eq!(decode("abcd"), Err(ParseDigestError::InvalidLength { expected: 64, actual: 4 }));
    assert_eq!(decode(""), Err(ParseDigestError::InvalidLength { expected: 64, actual: 0 }));
  }

  #[test]
  fn decode_reports_first_bad_digit() {
    let mut text = String::from(ABC);
    text.replace_range(9..10, "z");
    assert_eq!(decode(&text), Err(ParseDigestError::InvalidHexDigit { index: 9, byte: b'z' }));
  }

  #[test]
  fn verify_detects_any_single_byte_difference() {
    let good = digest(b"abc");
    assert_eq!(verify(&good, &good), Ok(()));
    for i in 0..DIGEST_LEN {
      let mut bad = good;
      bad[i] ^= 0x01;
      assert_eq!(verify(&good, &bad), Err(VerificationError::new()), "byte {i}");
    }
  }
}
