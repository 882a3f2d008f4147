//! The SHA-256 compression function.
//!
//! `compress(H, M)` expands the 16 big-endian words of block `M` into the
//! 64-word message schedule, runs 64 rounds over the working variables
//! `a..h`, and adds the result back into `H`. Every addition is modulo 2^32.

#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression schedule

use crate::{state::HashState, util::rotr32};

/// Block size in bytes.
pub const BLOCK_LEN: usize = 64;

/// Initial hash value: first 32 bits of the fractional parts of the square
/// roots of the first 8 primes.
pub const H0: [u32; 8] = [
  0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants: first 32 bits of the fractional parts of the cube roots of
/// the first 64 primes.
pub const K: [u32; 64] = [
  0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5, 0xd807aa98,
  0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786,
  0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8,
  0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
  0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819,
  0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a,
  0x5b9cca4f, 0x682e6ff3, 0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
  0xc67178f2,
];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

/// Expand a block into the 64-word message schedule `W`.
///
/// `W[0..16]` are the block's big-endian words; the rest follow
/// `W[i] = σ1(W[i-2]) + W[i-7] + σ0(W[i-15]) + W[i-16]`.
#[must_use]
pub fn message_schedule(block: &[u8; BLOCK_LEN]) -> [u32; 64] {
  let mut w = [0u32; 64];
  let (words, _) = block.as_chunks::<4>();
  for (slot, word) in w.iter_mut().zip(words) {
    *slot = u32::from_be_bytes(*word);
  }
  for i in 16..64 {
    w[i] = small_sigma1(w[i - 2])
      .wrapping_add(w[i - 7])
      .wrapping_add(small_sigma0(w[i - 15]))
      .wrapping_add(w[i - 16]);
  }
  w
}

/// One round over the working variables `[a, b, c, d, e, f, g, h]`.
#[inline(always)]
fn round([a, b, c, d, e, f, g, h]: [u32; 8], k: u32, w: u32) -> [u32; 8] {
  let t1 = h
    .wrapping_add(big_sigma1(e))
    .wrapping_add(ch(e, f, g))
    .wrapping_add(k)
    .wrapping_add(w);
  let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

  [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g]
}

/// Compress one block into `state`.
///
/// The block is exactly [`BLOCK_LEN`] bytes by construction; padding and
/// length framing are the caller's job (see [`crate::digest_source`]).
#[inline]
pub fn compress(state: &mut HashState, block: &[u8; BLOCK_LEN]) {
  let w = message_schedule(block);

  let h = state.words_mut();
  let mut v = *h;
  for (&k, &wi) in K.iter().zip(&w) {
    v = round(v, k, wi);
  }

  for (word, x) in h.iter_mut().zip(v) {
    *word = word.wrapping_add(x);
  }
}

/// Compress a run of whole blocks in order.
#[inline]
pub fn compress_blocks(state: &mut HashState, blocks: &[[u8; BLOCK_LEN]]) {
  for block in blocks {
    compress(state, block);
  }
}
