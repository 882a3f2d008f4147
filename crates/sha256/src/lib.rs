//! Portable SHA-256 (FIPS 180-4).
//!
//! The engine has two layers:
//!
//! - [`compress`] - the 64-round compression function over one 64-byte block.
//! - [`digest_source`] - the stream framer: pulls blocks from a [`ByteSource`],
//!   compresses them, and appends the `0x80 || zeros || bit-length` trailer.
//!
//! [`Sha256`] is the incremental ([`Digest`]) form of the same computation for
//! callers that push bytes rather than hand over a source.
//!
//! ```
//! use sha256::{Digest as _, Sha256};
//!
//! let expected = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
//! assert_eq!(sha256::hex::encode(&sha256::digest(b"abc")).as_str(), expected);
//!
//! let mut h = Sha256::new();
//! h.update(b"a");
//! h.update(b"bc");
//! assert_eq!(h.finalize(), sha256::digest(b"abc"));
//! ```
//!
//! # Features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | [`digest_reader`] and the `std::io` adapters |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod compress;
mod framer;
mod hasher;
pub mod hex;
mod state;
mod util;

pub use compress::{BLOCK_LEN, H0, K, compress, compress_blocks, message_schedule};
#[cfg(feature = "std")]
pub use framer::digest_reader;
pub use framer::{BlockObserver, digest, digest_source, digest_source_observed, pad_and_compress};
pub use hasher::Sha256;
pub use state::{DIGEST_LEN, HashState};
#[cfg(feature = "std")]
pub use traits::io;
pub use traits::{ByteSource, Digest, ParseDigestError, VerificationError};
