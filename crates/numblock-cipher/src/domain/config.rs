//! Block cipher configuration and validation
//!
//! # Example
//!
//! ```
//! use numblock_cipher::{ChainingMode, NumBlockConfig};
//!
//! let config = NumBlockConfig::default()
//!     .with_cipher_name("rsa-cbc")
//!     .with_default_mode(ChainingMode::Cbc);
//! assert!(config.validate().is_ok());
//! ```

use super::mode::ChainingMode;
use crate::errors::CipherError;
use serde::{Deserialize, Serialize};

/// Number block cipher configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumBlockConfig {
    /// Reported cipher name; the number cipher's name when `None`
    pub cipher_name: Option<String>,
    /// Mode used when a caller does not name one
    pub default_mode: ChainingMode,
}

impl NumBlockConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CipherError> {
        if let Some(name) = &self.cipher_name {
            if name.trim().is_empty() {
                return Err(CipherError::InvalidConfig(
                    "cipher_name cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Builder-style method to set the cipher name
    pub fn with_cipher_name(mut self, name: impl Into<String>) -> Self {
        self.cipher_name = Some(name.into());
        self
    }

    /// Builder-style method to set the default mode
    pub fn with_default_mode(mut self, mode: ChainingMode) -> Self {
        self.default_mode = mode;
        self
    }
}
