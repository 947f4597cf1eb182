//! # Service Layer
//!
//! - `NumBlockCipher`: sizes blocks per key and builds transforms
//! - `NumBlockTransform`: per-stream CBC state machine

pub mod cipher;
pub mod transform;

pub use cipher::NumBlockCipher;
pub use transform::NumBlockTransform;
