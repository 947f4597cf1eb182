//! # Outbound Ports (Driven Ports / SPI)
//!
//! Capabilities the block cipher depends on but does not implement: the
//! number cipher and the source of random padding bytes.

use crate::domain::codec::BlockNumber;
use crate::errors::CipherError;

/// One direction of a keyed number cipher.
///
/// `apply` maps an integer in `[0, max_number]` to another integer in the
/// same range. The encrypting and decrypting transforms of one key are
/// inverses of each other and report the same `max_number`.
pub trait NumberTransform {
    /// Integer type the transform operates on.
    type Number: BlockNumber;

    /// Largest integer the transform handles faithfully.
    fn max_number(&self) -> Self::Number;

    /// Transform one integer.
    fn apply(&self, value: &Self::Number) -> Result<Self::Number, CipherError>;
}

/// Keyed number cipher (for example RSA).
///
/// Produces direction-specific [`NumberTransform`] handles from a key.
pub trait NumberCipher {
    /// Integer type shared by both directions.
    type Number: BlockNumber;
    /// Key type.
    type Key;
    /// Key factory exposed to callers unchanged.
    type KeyFactory;
    /// Encrypting handle.
    type Encrypter: NumberTransform<Number = Self::Number>;
    /// Decrypting handle.
    type Decrypter: NumberTransform<Number = Self::Number>;

    /// Cipher name.
    fn name(&self) -> &str;

    /// True if the same key is used in both directions.
    fn symmetric(&self) -> bool;

    /// Build the encrypting handle for `key`.
    fn encrypter(&self, key: &Self::Key) -> Result<Self::Encrypter, CipherError>;

    /// Build the decrypting handle for `key`.
    fn decrypter(&self, key: &Self::Key) -> Result<Self::Decrypter, CipherError>;

    /// Factory for generating or validating keys.
    fn key_factory(&self) -> &Self::KeyFactory;
}

/// Source of random padding bytes.
pub trait RandomSource {
    /// Fill `buf` with fresh random bytes.
    fn fill(&mut self, buf: &mut [u8]);

    /// Return exactly `n` fresh random bytes.
    fn next(&mut self, n: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; n];
        self.fill(&mut bytes);
        bytes
    }
}
