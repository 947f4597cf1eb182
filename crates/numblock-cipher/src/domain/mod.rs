//! # Domain Layer
//!
//! Pure block framing logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod chaining;
pub mod codec;
pub mod config;
pub mod mode;
pub mod padding;
pub mod sizing;

pub use chaining::ChainingValue;
pub use codec::{bytes_to_uint, uint_to_block, uint_to_bytes, BlockNumber};
pub use config::NumBlockConfig;
pub use mode::{ChainingMode, Direction};
pub use sizing::BlockSizes;
