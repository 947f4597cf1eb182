//! # Adapters Layer
//!
//! Concrete implementations of the outbound ports.

pub mod random;

pub use random::{OsRandom, RngRandom, SharedRandom};
