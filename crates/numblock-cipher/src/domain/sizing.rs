//! # Block Sizing
//!
//! Derives safe plaintext and ciphertext block sizes from the largest number
//! a number cipher can transform.
//!
//! INVARIANTS:
//! - `cipher == plain + PADDING_OVERHEAD`
//! - `plain >= 1`

use super::codec::{uint_to_bytes, BlockNumber};
use crate::errors::CipherError;

/// Leading marker byte of every padded block.
pub const MARKER: u8 = 0x02;

/// Separator between the masked plaintext and the random tail.
pub const SEPARATOR: u8 = 0x00;

/// Number of random bytes appended to every padded block.
pub const RANDOM_PAD_LEN: usize = 8;

/// Marker, separator and random tail.
pub const ENVELOPE_LEN: usize = 1 + 1 + RANDOM_PAD_LEN;

/// Envelope plus one byte of margin keeping the padded number below the bound.
pub const PADDING_OVERHEAD: usize = ENVELOPE_LEN + 1;

/// Plaintext and ciphertext block sizes for one key.
///
/// Only constructed through [`BlockSizes::from_max_number`] or
/// [`BlockSizes::from_cipher_block_size`], so the invariants always hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockSizes {
    plain: usize,
    cipher: usize,
}

impl BlockSizes {
    /// Compute sizes from a number cipher's max number.
    ///
    /// # Errors
    ///
    /// `CipherError::BlockSizeTooSmall` if the bound encodes in
    /// `PADDING_OVERHEAD` bytes or fewer.
    pub fn from_max_number<N: BlockNumber>(max_number: &N) -> Result<Self, CipherError> {
        let cipher = uint_to_bytes(max_number).len();
        Self::from_cipher_block_size(cipher)
    }

    /// Compute sizes from an already known ciphertext block size.
    pub fn from_cipher_block_size(cipher: usize) -> Result<Self, CipherError> {
        if cipher <= PADDING_OVERHEAD {
            return Err(CipherError::BlockSizeTooSmall {
                cipher_block_size: cipher,
            });
        }
        Ok(Self {
            plain: cipher - PADDING_OVERHEAD,
            cipher,
        })
    }

    /// Bytes per plaintext block (also the IV length).
    pub fn plain(&self) -> usize {
        self.plain
    }

    /// Bytes per ciphertext block.
    pub fn cipher(&self) -> usize {
        self.cipher
    }

    /// Length of a padded block before the numeric transform.
    pub fn padded(&self) -> usize {
        self.plain + ENVELOPE_LEN
    }
}
