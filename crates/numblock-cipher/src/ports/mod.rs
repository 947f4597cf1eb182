//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that callers use
//! - **Outbound (Driven)**: Number cipher and random source this crate needs

pub mod inbound;
pub mod outbound;

pub use inbound::{BlockCipherApi, BlockTransform};
pub use outbound::{NumberCipher, NumberTransform, RandomSource};
