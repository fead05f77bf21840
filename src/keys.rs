//! Testnet WIF encoding of private scalars and P2PKH addresses of public keys

use crate::base58::{check_decode, check_encode};
use crate::error::{KeyError, Result};
use crate::ripemd160::{PUBKEY_HASH_LEN, hash160};
use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;

/// Version byte prefixed to testnet WIF private keys
pub const PRIVATE_KEY_VERSION: u8 = 0xef;

/// Version byte prefixed to testnet P2PKH addresses
pub const ADDRESS_VERSION: u8 = 0x6f;

/// Length of an uncompressed SEC1 public key: prefix + X + Y
pub const PUBLIC_KEY_LEN: usize = 65;

const UNCOMPRESSED_PREFIX: u8 = 0x04;
const MAX_SCALAR_LEN: usize = 32;

/// Private key scalar as an unsigned big-endian integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateScalar(BigUint);

impl PrivateScalar {
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        PrivateScalar(BigUint::from_bytes_be(bytes))
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Ok(Self::from_bytes_be(&hex::decode(s)?))
    }

    /// Big-endian bytes without leading zeros. Zero serializes to no bytes at all.
    pub fn to_minimal_bytes(&self) -> Vec<u8> {
        if self.0.is_zero() {
            Vec::new()
        } else {
            self.0.to_bytes_be()
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::LowerHex for PrivateScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Uncompressed SEC1 public key: 0x04 || X || Y
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKeyBytes([u8; PUBLIC_KEY_LEN]);

impl PublicKeyBytes {
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::try_from(hex::decode(s)?.as_slice())
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.0
    }

    /// RIPEMD160(SHA256(key))
    pub fn hash160(&self) -> Result<[u8; PUBKEY_HASH_LEN]> {
        hash160(&self.0)
    }
}

impl TryFrom<&[u8]> for PublicKeyBytes {
    type Error = KeyError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; PUBLIC_KEY_LEN] = bytes.try_into().map_err(|_| {
            KeyError::InvalidFormat(format!(
                "Uncompressed public key must be {PUBLIC_KEY_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        if raw[0] != UNCOMPRESSED_PREFIX {
            return Err(KeyError::InvalidFormat(format!(
                "Invalid uncompressed public key prefix {:#04x}",
                raw[0]
            )));
        }
        Ok(PublicKeyBytes(raw))
    }
}

/// Encode a private scalar as a testnet WIF string.
///
/// No compression flag is appended: the matching public key is used in its
/// uncompressed form.
pub fn encode_private_key_wif(scalar: &PrivateScalar) -> String {
    let scalar_bytes = scalar.to_minimal_bytes();
    trace!("encoding WIF for a {}-byte scalar", scalar_bytes.len());

    let mut payload = Vec::with_capacity(1 + scalar_bytes.len());
    payload.push(PRIVATE_KEY_VERSION);
    payload.extend_from_slice(&scalar_bytes);
    check_encode(&payload)
}

/// Encode a public key as a testnet P2PKH address
pub fn encode_public_key_address(public_key: &PublicKeyBytes) -> Result<String> {
    let pubkey_hash = public_key.hash160()?;
    debug!("public key hash {}", hex::encode(pubkey_hash));
    Ok(pubkey_hash_to_address(&pubkey_hash))
}

fn pubkey_hash_to_address(pubkey_hash: &[u8; PUBKEY_HASH_LEN]) -> String {
    let mut payload = Vec::with_capacity(1 + PUBKEY_HASH_LEN);
    payload.push(ADDRESS_VERSION);
    payload.extend_from_slice(pubkey_hash);
    check_encode(&payload)
}

/// Split a decoded Base58Check payload into its body after checking the version byte
fn strip_version(payload: &[u8], expected: u8) -> Result<&[u8]> {
    let (&found, body) = payload
        .split_first()
        .ok_or_else(|| KeyError::InvalidFormat("Missing version byte".into()))?;
    if found != expected {
        return Err(KeyError::VersionMismatch { expected, found });
    }
    Ok(body)
}

/// Decode a testnet WIF string back into its private scalar
pub fn decode_wif(wif: &str) -> Result<PrivateScalar> {
    let payload = check_decode(wif)?;
    let scalar_bytes = strip_version(&payload, PRIVATE_KEY_VERSION)?;
    if scalar_bytes.len() > MAX_SCALAR_LEN {
        return Err(KeyError::InvalidFormat(format!(
            "WIF scalar is {} bytes, at most {MAX_SCALAR_LEN} allowed",
            scalar_bytes.len()
        )));
    }
    Ok(PrivateScalar::from_bytes_be(scalar_bytes))
}

/// Extract the public key hash from a testnet P2PKH address
pub fn address_to_pubkey_hash(address: &str) -> Result<[u8; PUBKEY_HASH_LEN]> {
    let payload = check_decode(address)?;
    if payload.len() != 1 + PUBKEY_HASH_LEN {
        return Err(KeyError::InvalidFormat(format!(
            "Invalid address payload length {}",
            payload.len()
        )));
    }
    let body = strip_version(&payload, ADDRESS_VERSION)?;

    let mut pubkey_hash = [0u8; PUBKEY_HASH_LEN];
    pubkey_hash.copy_from_slice(body);
    Ok(pubkey_hash)
}
