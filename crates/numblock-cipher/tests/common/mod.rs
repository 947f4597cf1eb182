//! Shared fixtures: textbook RSA over `U256` and synthetic bounded ciphers.

use numblock_cipher::{CipherError, NumBlockCipher, NumberCipher, NumberTransform, RngRandom};
use primitive_types::{U256, U512};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// 256-bit modulus, e = 65537.
pub const RSA256_N: &str = "b6e0547f914b9915d94ef3518e16ff18d2820d98e0315b25e1273b4816662e27";
pub const RSA256_D: &str = "421a3a50d62b164db07bfa358b7fc27b0ff003243ad4ef619274059ba7aeb6b1";

/// 160-bit modulus, e = 65537.
#[allow(dead_code)]
pub const RSA160_N: &str = "a682633a852472e6e55079b0acb720c5204968f7";
#[allow(dead_code)]
pub const RSA160_D: &str = "5d546c461ae6c938be832b707f0162ddd8db30a1";

pub const RSA_E: &str = "10001";

#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[allow(dead_code)]
pub fn seeded(seed: u64) -> RngRandom<StdRng> {
    RngRandom::new(StdRng::seed_from_u64(seed))
}

/// Textbook RSA block cipher drawing padding from a seeded generator.
#[allow(dead_code)]
pub fn seeded_rsa(seed: u64) -> NumBlockCipher<TextbookRsa, RngRandom<StdRng>> {
    NumBlockCipher::with_random(TextbookRsa::default(), seeded(seed))
}

// =============================================================================
// Textbook RSA
// =============================================================================

/// RSA key; the private exponent is absent for public keys.
#[derive(Clone, Debug)]
pub struct RsaKey {
    pub modulus: U256,
    pub public_exponent: U256,
    pub private_exponent: Option<U256>,
}

/// Loads and checks keys from hex components.
#[derive(Debug, Default)]
pub struct RsaKeyFactory;

impl RsaKeyFactory {
    pub fn from_hex(&self, n: &str, e: &str, d: Option<&str>) -> Result<RsaKey, CipherError> {
        let parse = |s: &str| {
            U256::from_str_radix(s, 16).map_err(|e| CipherError::InvalidKey(format!("{:?}", e)))
        };
        Ok(RsaKey {
            modulus: parse(n)?,
            public_exponent: parse(e)?,
            private_exponent: d.map(parse).transpose()?,
        })
    }

    /// Check that the private exponent inverts the public one on a probe value.
    #[allow(dead_code)]
    pub fn validate(&self, key: &RsaKey) -> bool {
        let Some(d) = key.private_exponent else {
            return true;
        };
        let probe = U256::from(0x0102_0304u64) % key.modulus;
        let c = mod_pow(probe, key.public_exponent, key.modulus);
        mod_pow(c, d, key.modulus) == probe
    }
}

pub struct RsaTransform {
    modulus: U256,
    exponent: U256,
}

impl NumberTransform for RsaTransform {
    type Number = U256;

    fn max_number(&self) -> U256 {
        self.modulus - U256::one()
    }

    fn apply(&self, value: &U256) -> Result<U256, CipherError> {
        if *value >= self.modulus {
            return Err(CipherError::NumberCipher("value exceeds modulus".into()));
        }
        Ok(mod_pow(*value, self.exponent, self.modulus))
    }
}

#[derive(Default)]
pub struct TextbookRsa {
    factory: RsaKeyFactory,
}

impl NumberCipher for TextbookRsa {
    type Number = U256;
    type Key = RsaKey;
    type KeyFactory = RsaKeyFactory;
    type Encrypter = RsaTransform;
    type Decrypter = RsaTransform;

    fn name(&self) -> &str {
        "rsa"
    }

    fn symmetric(&self) -> bool {
        false
    }

    fn encrypter(&self, key: &RsaKey) -> Result<RsaTransform, CipherError> {
        Ok(RsaTransform {
            modulus: key.modulus,
            exponent: key.public_exponent,
        })
    }

    fn decrypter(&self, key: &RsaKey) -> Result<RsaTransform, CipherError> {
        let exponent = key
            .private_exponent
            .ok_or_else(|| CipherError::InvalidKey("public key cannot decrypt".into()))?;
        Ok(RsaTransform {
            modulus: key.modulus,
            exponent,
        })
    }

    fn key_factory(&self) -> &RsaKeyFactory {
        &self.factory
    }
}

pub fn rsa256() -> RsaKey {
    RsaKeyFactory
        .from_hex(RSA256_N, RSA_E, Some(RSA256_D))
        .unwrap()
}

#[allow(dead_code)]
pub fn rsa160() -> RsaKey {
    RsaKeyFactory
        .from_hex(RSA160_N, RSA_E, Some(RSA160_D))
        .unwrap()
}

pub fn mod_pow(base: U256, exp: U256, modulus: U256) -> U256 {
    let mut result = U256::one();
    let mut base = base % modulus;
    let mut exp = exp;
    while !exp.is_zero() {
        if exp.bit(0) {
            result = mulmod(result, base, modulus);
        }
        exp >>= 1;
        base = mulmod(base, base, modulus);
    }
    result
}

/// Modular multiplication through `U512` to avoid overflow.
fn mulmod(a: U256, b: U256, m: U256) -> U256 {
    let product = (U512::from(a) * U512::from(b)) % U512::from(m);
    let mut bytes = [0u8; 64];
    product.to_big_endian(&mut bytes);
    U256::from_big_endian(&bytes[32..])
}

// =============================================================================
// Synthetic ciphers
// =============================================================================

/// Identity transform with a caller-chosen bound.
#[allow(dead_code)]
pub struct Bounded(pub u128);

#[allow(dead_code)]
pub struct BoundedHandle(u128);

impl NumberTransform for BoundedHandle {
    type Number = u128;

    fn max_number(&self) -> u128 {
        self.0
    }

    fn apply(&self, value: &u128) -> Result<u128, CipherError> {
        Ok(*value)
    }
}

impl NumberCipher for Bounded {
    type Number = u128;
    type Key = ();
    type KeyFactory = ();
    type Encrypter = BoundedHandle;
    type Decrypter = BoundedHandle;

    fn name(&self) -> &str {
        "bounded"
    }

    fn symmetric(&self) -> bool {
        true
    }

    fn encrypter(&self, _key: &()) -> Result<BoundedHandle, CipherError> {
        Ok(BoundedHandle(self.0))
    }

    fn decrypter(&self, _key: &()) -> Result<BoundedHandle, CipherError> {
        Ok(BoundedHandle(self.0))
    }

    fn key_factory(&self) -> &() {
        &()
    }
}

/// Reports a bound but returns values wider than it.
#[allow(dead_code)]
pub struct Misbehaving;

#[allow(dead_code)]
pub struct MisbehavingHandle;

impl NumberTransform for MisbehavingHandle {
    type Number = u128;

    fn max_number(&self) -> u128 {
        (1u128 << 96) - 1
    }

    fn apply(&self, _value: &u128) -> Result<u128, CipherError> {
        Ok(u128::MAX)
    }
}

impl NumberCipher for Misbehaving {
    type Number = u128;
    type Key = ();
    type KeyFactory = ();
    type Encrypter = MisbehavingHandle;
    type Decrypter = MisbehavingHandle;

    fn name(&self) -> &str {
        "misbehaving"
    }

    fn symmetric(&self) -> bool {
        true
    }

    fn encrypter(&self, _key: &()) -> Result<MisbehavingHandle, CipherError> {
        Ok(MisbehavingHandle)
    }

    fn decrypter(&self, _key: &()) -> Result<MisbehavingHandle, CipherError> {
        Ok(MisbehavingHandle)
    }

    fn key_factory(&self) -> &() {
        &()
    }
}

/// Has no usable handle in either direction.
#[allow(dead_code)]
pub struct Keyless;

impl NumberCipher for Keyless {
    type Number = u128;
    type Key = ();
    type KeyFactory = ();
    type Encrypter = BoundedHandle;
    type Decrypter = BoundedHandle;

    fn name(&self) -> &str {
        "keyless"
    }

    fn symmetric(&self) -> bool {
        true
    }

    fn encrypter(&self, _key: &()) -> Result<BoundedHandle, CipherError> {
        Err(CipherError::InvalidKey("no encrypter".into()))
    }

    fn decrypter(&self, _key: &()) -> Result<BoundedHandle, CipherError> {
        Err(CipherError::InvalidKey("no decrypter".into()))
    }

    fn key_factory(&self) -> &() {
        &()
    }
}
