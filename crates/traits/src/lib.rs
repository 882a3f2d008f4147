//! Core traits for the sha256 workspace.
//!
//! This crate provides the seams the digest engine is built against. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Implementors |
//! |-------|---------|--------------|
//! | [`Digest`] | Incremental fixed-size cryptographic hash | `sha256::Sha256` |
//! | [`ByteSource`] | Ordered byte stream that signals end by a short fill | `&[u8]`, [`io::ReadSource`] |
//!
//! # Error Types
//!
//! - [`VerificationError`] - Opaque error for digest comparison
//! - [`ParseDigestError`] - Hex text that is not a digest
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
pub mod error;
#[cfg(feature = "std")]
pub mod io;
mod source;

pub use digest::Digest;
pub use error::{ParseDigestError, VerificationError};
pub use source::ByteSource;
