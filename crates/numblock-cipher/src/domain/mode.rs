//! Chaining modes and transform directions.

use crate::errors::CipherError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Block chaining mode.
///
/// Only CBC exists today; new modes are added as variants here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainingMode {
    /// Cipher block chaining.
    #[default]
    #[serde(rename = "cbc")]
    Cbc,
}

impl ChainingMode {
    /// Every supported mode.
    pub const ALL: &'static [ChainingMode] = &[ChainingMode::Cbc];

    /// Mode name as used in mode strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainingMode::Cbc => "cbc",
        }
    }
}

impl FromStr for ChainingMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainingMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| CipherError::UnsupportedMode(s.to_string()))
    }
}

impl fmt::Display for ChainingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction a transform runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext blocks in, ciphertext blocks out.
    Encrypt,
    /// Ciphertext blocks in, plaintext blocks out.
    Decrypt,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}
