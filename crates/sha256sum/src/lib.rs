//! File-facing side of the SHA-256 engine.
//!
//! Opens inputs, feeds them to [`sha256::digest_source_observed`], prints
//! digests and optional hash-state tables, and maps failures to [`CliError`].

pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod run;

pub use config::{Args, Config};
pub use error::{CliError, Result};
pub use run::run;
