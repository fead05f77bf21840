//! P-256 keypairs feeding the WIF and address encoders

use crate::error::{KeyError, Result};
use crate::keys::{
    PrivateScalar, PublicKeyBytes, encode_private_key_wif, encode_public_key_address,
};
use log::debug;
use p256::SecretKey;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use rand::RngCore;

const SCALAR_LEN: usize = 32;

/// A P-256 secret key and everything derived from it
#[derive(Clone)]
pub struct KeyPair {
    secret: SecretKey,
}

impl KeyPair {
    /// Generate a secret key with uniform random distribution in [1, n)
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let mut attempts = 0u32;
        loop {
            let mut bytes = [0u8; SCALAR_LEN];
            rng.fill_bytes(&mut bytes);
            attempts += 1;
            // from_slice rejects zero and anything >= n
            if let Ok(secret) = SecretKey::from_slice(&bytes) {
                debug!("generated P-256 secret key after {attempts} draw(s)");
                return KeyPair { secret };
            }
        }
    }

    /// Load a big-endian scalar of at most 32 bytes
    pub fn from_secret_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > SCALAR_LEN {
            return Err(KeyError::InvalidFormat(format!(
                "P-256 scalar is {} bytes, at most {SCALAR_LEN} allowed",
                bytes.len()
            )));
        }
        let mut padded = [0u8; SCALAR_LEN];
        padded[SCALAR_LEN - bytes.len()..].copy_from_slice(bytes);

        let secret = SecretKey::from_slice(&padded).map_err(|_| {
            KeyError::InvalidFormat("Scalar is zero or not below the P-256 group order".into())
        })?;
        Ok(KeyPair { secret })
    }

    pub fn from_secret_hex(s: &str) -> Result<Self> {
        Self::from_secret_bytes(&hex::decode(s)?)
    }

    pub fn private_scalar(&self) -> PrivateScalar {
        PrivateScalar::from_bytes_be(&self.secret.to_bytes())
    }

    /// Uncompressed SEC1 encoding of the public key
    pub fn public_key_bytes(&self) -> Result<PublicKeyBytes> {
        let point = self.secret.public_key().to_encoded_point(false);
        PublicKeyBytes::try_from(point.as_bytes())
    }

    pub fn wif(&self) -> String {
        encode_private_key_wif(&self.private_scalar())
    }

    pub fn address(&self) -> Result<String> {
        encode_public_key_address(&self.public_key_bytes()?)
    }
}
