//! # Chaining Value
//!
//! CBC feedback mask. Always `plain` bytes long; regenerated from every
//! ciphertext block in both directions.

use crate::errors::CipherError;
use zeroize::Zeroize;

/// Per-stream chaining value, wiped on drop.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct ChainingValue(Vec<u8>);

impl ChainingValue {
    /// Create from an initialization vector.
    pub fn from_iv(iv: &[u8]) -> Self {
        Self(iv.to_vec())
    }

    /// All-zero chaining value of `len` bytes.
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0u8; len])
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the chaining value is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Current bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// XOR `block` with the chaining value. Operands must have equal length.
    pub fn mask(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        if block.len() != self.0.len() {
            return Err(CipherError::InvalidInputBlockSize {
                expected: self.0.len(),
                actual: block.len(),
            });
        }
        Ok(block.iter().zip(&self.0).map(|(a, b)| a ^ b).collect())
    }

    /// Carry the leading bytes of a ciphertext block forward.
    pub fn advance(&mut self, cipher_block: &[u8]) -> Result<(), CipherError> {
        let len = self.0.len();
        if cipher_block.len() < len {
            return Err(CipherError::InvalidInputBlockSize {
                expected: len,
                actual: cipher_block.len(),
            });
        }
        self.0.copy_from_slice(&cipher_block[..len]);
        Ok(())
    }
}

impl std::fmt::Debug for ChainingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainingValue")
            .field("len", &self.0.len())
            .finish()
    }
}
