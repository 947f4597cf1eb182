//! # Big-Endian Integer Codec
//!
//! Conversion between byte blocks and the fixed-width unsigned integers a
//! number cipher operates on.
//!
//! Blocks are always padded on the left with zero bytes to reach a target
//! width; they are never truncated from the right.

use crate::errors::CipherError;
use primitive_types::{U256, U512};

/// Fixed-width unsigned integer usable as a number-cipher operand.
pub trait BlockNumber: Clone + std::fmt::Debug + PartialEq + Send + Sync {
    /// Width of the full big-endian representation in bytes.
    const BYTES: usize;

    /// Load from exactly `Self::BYTES` big-endian bytes.
    fn from_be_padded(bytes: &[u8]) -> Self;

    /// Store into exactly `Self::BYTES` big-endian bytes.
    fn write_be_padded(&self, out: &mut [u8]);
}

macro_rules! impl_block_number_primitive {
    ($($t:ty),*) => {$(
        impl BlockNumber for $t {
            const BYTES: usize = std::mem::size_of::<$t>();

            fn from_be_padded(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$t>()];
                buf.copy_from_slice(bytes);
                <$t>::from_be_bytes(buf)
            }

            fn write_be_padded(&self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_be_bytes());
            }
        }
    )*};
}

macro_rules! impl_block_number_uint {
    ($($t:ty => $bytes:expr),*) => {$(
        impl BlockNumber for $t {
            const BYTES: usize = $bytes;

            fn from_be_padded(bytes: &[u8]) -> Self {
                <$t>::from_big_endian(bytes)
            }

            fn write_be_padded(&self, out: &mut [u8]) {
                self.to_big_endian(out);
            }
        }
    )*};
}

impl_block_number_primitive!(u64, u128);
impl_block_number_uint!(U256 => 32, U512 => 64);

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[first..]
}

/// Decode big-endian bytes into a number.
///
/// Leading zero bytes are ignored. Fails if the significant bytes do not fit
/// the width of `N`.
pub fn bytes_to_uint<N: BlockNumber>(bytes: &[u8]) -> Result<N, CipherError> {
    let significant = strip_leading_zeros(bytes);
    if significant.len() > N::BYTES {
        return Err(CipherError::InvalidInputBlockSize {
            expected: N::BYTES,
            actual: significant.len(),
        });
    }

    let mut buf = vec![0u8; N::BYTES];
    buf[N::BYTES - significant.len()..].copy_from_slice(significant);
    Ok(N::from_be_padded(&buf))
}

/// Minimal big-endian encoding. Zero encodes as a single `0x00` byte.
pub fn uint_to_bytes<N: BlockNumber>(value: &N) -> Vec<u8> {
    let mut buf = vec![0u8; N::BYTES];
    value.write_be_padded(&mut buf);
    let significant = strip_leading_zeros(&buf);
    if significant.is_empty() {
        vec![0u8]
    } else {
        significant.to_vec()
    }
}

/// Encode `value` into exactly `width` bytes, left-padding with zeros.
///
/// # Errors
///
/// `CipherError::InvalidOutputBlockSize` if the minimal encoding is longer
/// than `width`.
pub fn uint_to_block<N: BlockNumber>(value: &N, width: usize) -> Result<Vec<u8>, CipherError> {
    let minimal = uint_to_bytes(value);
    if minimal.len() > width {
        return Err(CipherError::InvalidOutputBlockSize {
            expected: width,
            actual: minimal.len(),
        });
    }

    let mut block = vec![0u8; width - minimal.len()];
    block.extend_from_slice(&minimal);
    Ok(block)
}
