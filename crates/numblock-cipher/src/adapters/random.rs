//! # Random Source Adapters
//!
//! [`RandomSource`] implementations backed by `rand`.

use crate::ports::outbound::RandomSource;
use parking_lot::Mutex;
use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Arc;

/// Operating system CSPRNG. Default random source of the block cipher.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl OsRandom {
    /// Create a new OS random source.
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}

/// Any `rand` generator as a random source.
///
/// Cloning clones the generator state, so clones of a seeded generator
/// repeat the same byte stream.
#[derive(Clone, Debug)]
pub struct RngRandom<R> {
    rng: R,
}

impl<R: RngCore> RngRandom<R> {
    /// Wrap a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> RandomSource for RngRandom<R> {
    fn fill(&mut self, buf: &mut [u8]) {
        self.rng.fill_bytes(buf);
    }
}

/// One random source shared by a block cipher and all of its transforms.
///
/// Clones hand out the same underlying source, so every draw advances one
/// stream no matter which transform makes it.
#[derive(Debug)]
pub struct SharedRandom<R> {
    inner: Arc<Mutex<R>>,
}

impl<R: RandomSource> SharedRandom<R> {
    /// Share `source`.
    pub fn new(source: R) -> Self {
        Self {
            inner: Arc::new(Mutex::new(source)),
        }
    }
}

impl<R> Clone for SharedRandom<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RandomSource> RandomSource for SharedRandom<R> {
    fn fill(&mut self, buf: &mut [u8]) {
        self.inner.lock().fill(buf);
    }
}
