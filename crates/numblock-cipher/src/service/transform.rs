//! # Chained Block Transform
//!
//! Stateful CBC transform driving a number cipher one block at a time.
//!
//! ## Encrypt (per `plain`-byte block `B`)
//!
//! ```text
//! X = B ^ CV
//! P = 0x02 | X | 0x00 | rand(8)          (plain + 10 bytes)
//! C = be(apply(uint(P)), cipher)         (cipher bytes)
//! CV = C[..plain]
//! ```
//!
//! ## Decrypt (per `cipher`-byte block `C`)
//!
//! ```text
//! D = be(apply(uint(C)), plain + 10)
//! check D[0] == 0x02 and D[len - 9] == 0x00
//! B = D[1..1 + plain] ^ CV
//! CV = C[..plain]
//! ```

use crate::domain::chaining::ChainingValue;
use crate::domain::codec::{bytes_to_uint, uint_to_block};
use crate::domain::mode::{ChainingMode, Direction};
use crate::domain::padding;
use crate::domain::sizing::{BlockSizes, RANDOM_PAD_LEN};
use crate::errors::CipherError;
use crate::ports::inbound::BlockTransform;
use crate::ports::outbound::{NumberTransform, RandomSource};
use std::fmt;
use tracing::{debug, trace, warn};

/// CBC transform over a number cipher.
///
/// Bound to one key, one direction and one IV; serves exactly one stream.
/// After a block-level failure every further call returns
/// `CipherError::TransformFailed`.
pub struct NumBlockTransform<T, R> {
    num_transform: T,
    random: R,
    sizes: BlockSizes,
    direction: Direction,
    mode: ChainingMode,
    chaining: ChainingValue,
    failed: bool,
}

impl<T: NumberTransform, R: RandomSource> NumBlockTransform<T, R> {
    /// Create a transform.
    ///
    /// # Errors
    /// * `CipherError::BlockSizeTooSmall` - the handle's bound leaves no room for a block
    /// * `CipherError::InvalidConfig` - `sizes` were derived from a different bound
    /// * `CipherError::InvalidIv` - `iv` is not `sizes.plain()` bytes
    /// * `CipherError::UnsupportedMode` - `mode` is not a supported mode
    pub fn new(
        num_transform: T,
        sizes: BlockSizes,
        iv: &[u8],
        mode: &str,
        direction: Direction,
        random: R,
    ) -> Result<Self, CipherError> {
        let bound_sizes = BlockSizes::from_max_number(&num_transform.max_number())?;
        if sizes != bound_sizes {
            return Err(CipherError::InvalidConfig(format!(
                "block sizes {}/{} do not match the number cipher bound ({}/{})",
                sizes.plain(),
                sizes.cipher(),
                bound_sizes.plain(),
                bound_sizes.cipher()
            )));
        }

        // IV always uses the plaintext block size
        if iv.len() != sizes.plain() {
            return Err(CipherError::InvalidIv {
                expected: sizes.plain(),
                actual: iv.len(),
            });
        }
        let mode: ChainingMode = mode.parse()?;

        debug!(
            direction = %direction,
            mode = %mode,
            plain_block_size = sizes.plain(),
            cipher_block_size = sizes.cipher(),
            "Created number block transform"
        );

        Ok(Self {
            num_transform,
            random,
            sizes,
            direction,
            mode,
            chaining: ChainingValue::from_iv(iv),
            failed: false,
        })
    }

    /// Block sizes of the key this transform is bound to.
    pub fn block_sizes(&self) -> BlockSizes {
        self.sizes
    }

    /// Chaining mode.
    pub fn mode(&self) -> ChainingMode {
        self.mode
    }

    /// Current chaining value.
    pub fn chaining_value(&self) -> &[u8] {
        self.chaining.as_bytes()
    }

    /// True once a block-level failure has occurred.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    fn transform_cbc(&mut self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let in_size = self.input_block_size();
        let blocks = data.len() / in_size;
        let mut output = Vec::with_capacity(blocks * self.output_block_size());

        for block in data.chunks_exact(in_size) {
            let out = match self.direction {
                Direction::Encrypt => self.encrypt_block(block)?,
                Direction::Decrypt => self.decrypt_block(block)?,
            };
            output.extend_from_slice(&out);
        }

        trace!(direction = %self.direction, blocks, "Processed CBC blocks");
        Ok(output)
    }

    fn encrypt_block(&mut self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let masked = self.chaining.mask(block)?;

        let mut random = [0u8; RANDOM_PAD_LEN];
        self.random.fill(&mut random);
        let padded = padding::wrap(&masked, &random);

        let cipher_block = self.number_step(&padded, self.sizes.padded(), self.sizes.cipher())?;
        // Only plaintext-size bytes fit the carried-forward mask
        self.chaining.advance(&cipher_block)?;
        Ok(cipher_block)
    }

    fn decrypt_block(&mut self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let decoded = self.number_step(block, self.sizes.cipher(), self.sizes.padded())?;
        let masked = padding::unwrap(&decoded, self.sizes.plain())?;
        let plaintext = self.chaining.mask(masked)?;
        self.chaining.advance(block)?;
        Ok(plaintext)
    }

    fn number_step(
        &self,
        block: &[u8],
        in_size: usize,
        out_size: usize,
    ) -> Result<Vec<u8>, CipherError> {
        if block.len() != in_size {
            return Err(CipherError::InvalidInputBlockSize {
                expected: in_size,
                actual: block.len(),
            });
        }
        let value: T::Number = bytes_to_uint(block)?;
        let transformed = self.num_transform.apply(&value)?;
        uint_to_block(&transformed, out_size)
    }
}

impl<T: NumberTransform, R: RandomSource> BlockTransform for NumBlockTransform<T, R> {
    fn transform(&mut self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        if self.failed {
            return Err(CipherError::TransformFailed);
        }

        let block_size = self.input_block_size();
        if data.len() % block_size != 0 {
            return Err(CipherError::NotBlockAligned {
                len: data.len(),
                block_size,
            });
        }

        let result = match self.mode {
            ChainingMode::Cbc => self.transform_cbc(data),
        };

        if let Err(err) = &result {
            warn!(direction = %self.direction, error = %err, "Block transform failed, stream is unusable");
            self.failed = true;
        }
        result
    }

    fn input_block_size(&self) -> usize {
        match self.direction {
            Direction::Encrypt => self.sizes.plain(),
            Direction::Decrypt => self.sizes.cipher(),
        }
    }

    fn output_block_size(&self) -> usize {
        match self.direction {
            Direction::Encrypt => self.sizes.cipher(),
            Direction::Decrypt => self.sizes.plain(),
        }
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}

impl<T, R> fmt::Debug for NumBlockTransform<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumBlockTransform")
            .field("direction", &self.direction)
            .field("mode", &self.mode)
            .field("sizes", &self.sizes)
            .field("failed", &self.failed)
            .finish()
    }
}
