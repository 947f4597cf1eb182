//! # Cipher Errors
//!
//! Error types for the number block cipher and its transforms.
//!
//! Every failure is local to one call and none of them are transient, so
//! nothing here is retried internally.

use thiserror::Error;

/// Coarse classification of a [`CipherError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Key, mode, IV or block size problem detected at construction time.
    Configuration,
    /// Input to `transform` is not a whole number of blocks.
    Alignment,
    /// A decrypted block failed the marker or separator check.
    CiphertextValidation,
    /// A number did not fit the byte width allotted to it.
    EncodingBounds,
    /// The underlying number cipher reported a failure.
    NumberCipher,
    /// The transform already failed and must be discarded.
    StreamFailed,
}

/// Errors raised by the block cipher adapter and its transforms.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CipherError {
    // =========================================================================
    // Configuration
    // =========================================================================
    /// Neither the encrypting nor the decrypting handle could report a bound.
    #[error("Could not determine max number")]
    MaxNumberUnavailable,

    /// The number cipher's bound leaves no room for the padding overhead.
    #[error("Supported block size must be minimum 1 (cipher block size {cipher_block_size})")]
    BlockSizeTooSmall {
        /// Byte length of the encoded max number
        cipher_block_size: usize,
    },

    /// Mode string is not a supported chaining mode.
    #[error("Mode not supported: {0}")]
    UnsupportedMode(String),

    /// IV length differs from the plaintext block size.
    #[error("Invalid initialization vector: expected {expected} bytes, got {actual}")]
    InvalidIv {
        /// Plaintext block size
        expected: usize,
        /// Supplied IV length
        actual: usize,
    },

    /// A key could not be turned into a number-cipher handle.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Stream processing
    // =========================================================================
    /// Input length is not a multiple of the block size.
    #[error("Data not block aligned: {len} bytes with block size {block_size}")]
    NotBlockAligned {
        /// Length of the rejected input
        len: usize,
        /// Input block size of the transform
        block_size: usize,
    },

    /// Decrypted block has a bad marker or separator byte.
    #[error("Invalid ciphertext")]
    InvalidCiphertext,

    /// A block handed to the numeric step has the wrong width.
    #[error("Invalid input block size: expected {expected}, got {actual}")]
    InvalidInputBlockSize {
        /// Required width
        expected: usize,
        /// Width received
        actual: usize,
    },

    /// A transformed number does not fit the output block.
    #[error("Invalid output block size: expected at most {expected}, got {actual}")]
    InvalidOutputBlockSize {
        /// Allotted width
        expected: usize,
        /// Minimal encoding length of the number
        actual: usize,
    },

    /// The number cipher failed to transform a value.
    #[error("Number cipher failure: {0}")]
    NumberCipher(String),

    /// A previous call failed mid-stream.
    #[error("Transform failed earlier and cannot be reused")]
    TransformFailed,
}

impl CipherError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CipherError::MaxNumberUnavailable
            | CipherError::BlockSizeTooSmall { .. }
            | CipherError::UnsupportedMode(_)
            | CipherError::InvalidIv { .. }
            | CipherError::InvalidKey(_)
            | CipherError::InvalidConfig(_) => ErrorKind::Configuration,
            CipherError::NotBlockAligned { .. } => ErrorKind::Alignment,
            CipherError::InvalidCiphertext => ErrorKind::CiphertextValidation,
            CipherError::InvalidInputBlockSize { .. }
            | CipherError::InvalidOutputBlockSize { .. } => ErrorKind::EncodingBounds,
            CipherError::NumberCipher(_) => ErrorKind::NumberCipher,
            CipherError::TransformFailed => ErrorKind::StreamFailed,
        }
    }

    /// True for errors detected while building a cipher or transform.
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}
