//! # Padding Envelope
//!
//! Layout of a padded block (`plain + 10` bytes):
//!
//! ```text
//! 0x02 | masked plaintext (plain bytes) | 0x00 | random (8 bytes)
//! ```
//!
//! The marker and separator are the only integrity signal of the scheme.
//! They catch corruption and foreign ciphertexts but are not a MAC.

use super::sizing::{ENVELOPE_LEN, MARKER, RANDOM_PAD_LEN, SEPARATOR};
use crate::errors::CipherError;

/// Wrap a masked plaintext block with marker, separator and random tail.
pub fn wrap(masked: &[u8], random: &[u8; RANDOM_PAD_LEN]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(masked.len() + ENVELOPE_LEN);
    padded.push(MARKER);
    padded.extend_from_slice(masked);
    padded.push(SEPARATOR);
    padded.extend_from_slice(random);
    padded
}

/// Validate a decoded padded block and return its masked plaintext.
///
/// The returned slice is exactly `plain_size` bytes; the separator is not
/// part of it.
pub fn unwrap(decoded: &[u8], plain_size: usize) -> Result<&[u8], CipherError> {
    let expected = plain_size + ENVELOPE_LEN;
    if decoded.len() != expected {
        return Err(CipherError::InvalidInputBlockSize {
            expected,
            actual: decoded.len(),
        });
    }

    let separator_at = decoded.len() - RANDOM_PAD_LEN - 1;
    if decoded[0] != MARKER || decoded[separator_at] != SEPARATOR {
        return Err(CipherError::InvalidCiphertext);
    }

    Ok(&decoded[1..1 + plain_size])
}
