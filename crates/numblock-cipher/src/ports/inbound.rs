//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of the block cipher.

use crate::domain::mode::Direction;
use crate::errors::CipherError;

/// Stateful transform over a stream of whole blocks.
///
/// One instance serves exactly one ordered stream. Calls must not be
/// interleaved between threads; ordering between blocks is mandatory.
pub trait BlockTransform {
    /// Transform `data`, which must be a whole number of input blocks.
    ///
    /// # Errors
    /// * `CipherError::NotBlockAligned` - no output, state untouched
    /// * `CipherError::InvalidCiphertext` - decrypted block failed validation
    /// * `CipherError::InvalidOutputBlockSize` - number cipher broke its bound
    fn transform(&mut self, data: &[u8]) -> Result<Vec<u8>, CipherError>;

    /// Bytes per input block.
    fn input_block_size(&self) -> usize;

    /// Bytes per output block.
    fn output_block_size(&self) -> usize;

    /// Direction this transform runs in.
    fn direction(&self) -> Direction;
}

/// Block cipher API.
pub trait BlockCipherApi {
    /// Key type accepted by the cipher.
    type Key;
    /// Key factory of the underlying cipher.
    type KeyFactory;
    /// Encrypting transform.
    type Encrypter: BlockTransform;
    /// Decrypting transform.
    type Decrypter: BlockTransform;

    /// Cipher name.
    fn name(&self) -> &str;

    /// Names of the supported chaining modes.
    fn modes(&self) -> Vec<&'static str>;

    /// True if the same key is used in both directions.
    fn symmetric(&self) -> bool;

    /// Plaintext block size for `key`.
    fn plain_block_size(&self, key: &Self::Key) -> Result<usize, CipherError>;

    /// Ciphertext block size for `key`.
    fn cipher_block_size(&self, key: &Self::Key) -> Result<usize, CipherError>;

    /// Build an encrypting transform.
    ///
    /// A missing `iv` means an all-zero IV; a missing `mode` means the
    /// configured default mode.
    fn encrypter(
        &self,
        key: &Self::Key,
        iv: Option<&[u8]>,
        mode: Option<&str>,
    ) -> Result<Self::Encrypter, CipherError>;

    /// Build a decrypting transform. Arguments as for [`Self::encrypter`].
    fn decrypter(
        &self,
        key: &Self::Key,
        iv: Option<&[u8]>,
        mode: Option<&str>,
    ) -> Result<Self::Decrypter, CipherError>;

    /// Key factory of the underlying cipher.
    fn key_factory(&self) -> &Self::KeyFactory;
}
