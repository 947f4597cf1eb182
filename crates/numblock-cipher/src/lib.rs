//! # NumBlock Cipher - Block Cipher from a Number Cipher
//!
//! Turns any *number cipher* (a keyed, invertible map on integers bounded by
//! a maximum number, such as RSA modular exponentiation) into a byte-oriented
//! block cipher with CBC chaining and randomized, validated padding.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): codec, sizing, padding, chaining value, config
//! - **Ports Layer** (`ports/`): `BlockCipherApi`/`BlockTransform` (inbound),
//!   `NumberCipher`/`NumberTransform`/`RandomSource` (outbound)
//! - **Adapters Layer** (`adapters/`): OS and `rand`-backed random sources
//! - **Service Layer** (`service/`): `NumBlockCipher` and `NumBlockTransform`
//!
//! ## Block Layout
//!
//! | Size | Value |
//! |------|-------|
//! | `cipher` | byte length of the big-endian max number |
//! | `plain` | `cipher - 11` (must be at least 1) |
//! | padded | `0x02 \| (block ^ CV) \| 0x00 \| rand(8)` = `plain + 10` |
//!
//! ## Security Notes
//!
//! - The marker/separator check detects corruption and foreign ciphertexts;
//!   it is **not** a MAC.
//! - A transform that failed mid-stream refuses further input. Discard it.
//! - Transforms own their chaining value; use one per stream.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{OsRandom, RngRandom, SharedRandom};
pub use domain::{BlockNumber, BlockSizes, ChainingMode, Direction, NumBlockConfig};
pub use errors::{CipherError, ErrorKind};
pub use ports::{BlockCipherApi, BlockTransform, NumberCipher, NumberTransform, RandomSource};
pub use service::{NumBlockCipher, NumBlockTransform};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
