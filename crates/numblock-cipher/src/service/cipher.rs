//! # Number Block Cipher
//!
//! Application service implementing [`BlockCipherApi`] on top of any
//! [`NumberCipher`].
//!
//! The cipher itself is stateless: it sizes blocks per key and hands out
//! [`NumBlockTransform`] instances, each owning its own chaining value. All
//! transforms of one cipher draw padding bytes from the same random source.

use super::transform::NumBlockTransform;
use crate::adapters::random::{OsRandom, SharedRandom};
use crate::domain::config::NumBlockConfig;
use crate::domain::mode::{ChainingMode, Direction};
use crate::domain::sizing::BlockSizes;
use crate::errors::CipherError;
use crate::ports::inbound::BlockCipherApi;
use crate::ports::outbound::{NumberCipher, NumberTransform, RandomSource};
use tracing::debug;

/// Block cipher generated from a number cipher, CBC chaining only.
pub struct NumBlockCipher<C, R = OsRandom> {
    num_cipher: C,
    random: SharedRandom<R>,
    config: NumBlockConfig,
}

impl<C: NumberCipher> NumBlockCipher<C, OsRandom> {
    /// Create a block cipher using the OS random source.
    pub fn new(num_cipher: C) -> Self {
        Self::with_random(num_cipher, OsRandom)
    }
}

impl<C: NumberCipher, R: RandomSource> NumBlockCipher<C, R> {
    /// Create a block cipher with an injected random source.
    ///
    /// `random` is shared by every transform this cipher builds.
    pub fn with_random(num_cipher: C, random: R) -> Self {
        Self {
            num_cipher,
            random: SharedRandom::new(random),
            config: NumBlockConfig::default(),
        }
    }

    /// Apply a configuration, validating it first.
    pub fn with_config(mut self, config: NumBlockConfig) -> Result<Self, CipherError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Active configuration.
    pub fn config(&self) -> &NumBlockConfig {
        &self.config
    }

    /// The wrapped number cipher.
    pub fn number_cipher(&self) -> &C {
        &self.num_cipher
    }

    /// Plaintext and ciphertext block sizes for `key`.
    pub fn block_sizes(&self, key: &C::Key) -> Result<BlockSizes, CipherError> {
        let sizes = BlockSizes::from_max_number(&self.max_number(key)?)?;
        debug!(
            plain_block_size = sizes.plain(),
            cipher_block_size = sizes.cipher(),
            "Derived block sizes"
        );
        Ok(sizes)
    }

    fn max_number(&self, key: &C::Key) -> Result<C::Number, CipherError> {
        match self.num_cipher.encrypter(key) {
            Ok(handle) => return Ok(handle.max_number()),
            Err(err) => debug!(error = %err, "No encrypting handle, trying decrypting handle"),
        }
        self.num_cipher
            .decrypter(key)
            .map(|handle| handle.max_number())
            .map_err(|_| CipherError::MaxNumberUnavailable)
    }

    /// Fill in the zero IV and the configured default mode.
    fn resolve<'a>(
        &self,
        sizes: BlockSizes,
        iv: Option<&'a [u8]>,
        mode: Option<&'a str>,
    ) -> (Vec<u8>, &'a str) {
        let iv = iv.map_or_else(|| vec![0u8; sizes.plain()], <[u8]>::to_vec);
        let mode = mode.unwrap_or(self.config.default_mode.as_str());
        (iv, mode)
    }
}

impl<C: NumberCipher, R: RandomSource> BlockCipherApi for NumBlockCipher<C, R> {
    type Key = C::Key;
    type KeyFactory = C::KeyFactory;
    type Encrypter = NumBlockTransform<C::Encrypter, SharedRandom<R>>;
    type Decrypter = NumBlockTransform<C::Decrypter, SharedRandom<R>>;

    fn name(&self) -> &str {
        self.config
            .cipher_name
            .as_deref()
            .unwrap_or_else(|| self.num_cipher.name())
    }

    fn modes(&self) -> Vec<&'static str> {
        ChainingMode::ALL.iter().map(ChainingMode::as_str).collect()
    }

    fn symmetric(&self) -> bool {
        self.num_cipher.symmetric()
    }

    fn plain_block_size(&self, key: &C::Key) -> Result<usize, CipherError> {
        Ok(self.block_sizes(key)?.plain())
    }

    fn cipher_block_size(&self, key: &C::Key) -> Result<usize, CipherError> {
        Ok(self.block_sizes(key)?.cipher())
    }

    fn encrypter(
        &self,
        key: &C::Key,
        iv: Option<&[u8]>,
        mode: Option<&str>,
    ) -> Result<Self::Encrypter, CipherError> {
        let sizes = self.block_sizes(key)?;
        let (iv, mode) = self.resolve(sizes, iv, mode);
        let handle = self.num_cipher.encrypter(key)?;
        NumBlockTransform::new(
            handle,
            sizes,
            &iv,
            mode,
            Direction::Encrypt,
            self.random.clone(),
        )
    }

    fn decrypter(
        &self,
        key: &C::Key,
        iv: Option<&[u8]>,
        mode: Option<&str>,
    ) -> Result<Self::Decrypter, CipherError> {
        let sizes = self.block_sizes(key)?;
        let (iv, mode) = self.resolve(sizes, iv, mode);
        let handle = self.num_cipher.decrypter(key)?;
        NumBlockTransform::new(
            handle,
            sizes,
            &iv,
            mode,
            Direction::Decrypt,
            self.random.clone(),
        )
    }

    fn key_factory(&self) -> &C::KeyFactory {
        self.num_cipher.key_factory()
    }
}
