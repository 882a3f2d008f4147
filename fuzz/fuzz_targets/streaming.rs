//! Fuzz target for chunking independence.
//!
//! Arbitrary update splits and arbitrary short reads must both agree with the
//! one-shot digest.

#![no_main]

use std::io::{self, Read};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sha256::{Digest as _, Sha256};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for updates and reads
  chunk_sizes: Vec<u8>,
}

/// Serves reads in the sizes the fuzzer picked.
struct Scripted<'a> {
  data: &'a [u8],
  sizes: &'a [u8],
  turn: usize,
}

impl Read for Scripted<'_> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    let want = match self.sizes.get(self.turn % self.sizes.len().max(1)) {
      Some(&size) => usize::from(size).max(1),
      None => buf.len(),
    };
    self.turn += 1;
    let n = want.min(buf.len()).min(self.data.len());
    let (head, rest) = self.data.split_at(n);
    buf[..n].copy_from_slice(head);
    self.data = rest;
    Ok(n)
  }
}

fuzz_target!(|input: Input| {
  let expected = sha256::digest(&input.data);

  let mut hasher = Sha256::new();
  let mut offset = 0;
  for &size in input.chunk_sizes.iter().cycle().take(input.data.len() + 1) {
    if offset >= input.data.len() {
      break;
    }
    let end = (offset + usize::from(size).max(1)).min(input.data.len());
    hasher.update(&input.data[offset..end]);
    offset = end;
  }
  hasher.update(&input.data[offset..]);
  assert_eq!(hasher.finalize(), expected);

  let reader = Scripted { data: &input.data, sizes: &input.chunk_sizes, turn: 0 };
  assert_eq!(sha256::digest_reader(reader).unwrap(), expected);
});
