//! HASH160: the RIPEMD-160 over SHA-256 stage that turns a serialized public
//! key into its 20-byte address payload.

use crate::error::Result;
use crate::sha256::sha256;
use ripemd::{Digest, Ripemd160};
use std::io::Write;

/// Length of a RIPEMD-160 digest and therefore of a public key hash
pub const PUBKEY_HASH_LEN: usize = 20;

/// An incremental hash primitive: input goes in through `Write`, the digest
/// comes out of `sum`.
pub trait StreamDigest<const N: usize>: Write {
    fn sum(self) -> [u8; N];
}

impl StreamDigest<PUBKEY_HASH_LEN> for Ripemd160 {
    fn sum(self) -> [u8; PUBKEY_HASH_LEN] {
        self.finalize().into()
    }
}

/// One-shot RIPEMD-160
#[must_use]
pub fn ripemd160(data: &[u8]) -> [u8; PUBKEY_HASH_LEN] {
    Ripemd160::digest(data).into()
}

/// HASH160 = RIPEMD160(SHA256(data))
pub fn hash160(data: &[u8]) -> Result<[u8; PUBKEY_HASH_LEN]> {
    hash160_with::<Ripemd160>(data)
}

/// HASH160 with the second stage supplied by any 20-byte streaming digest.
/// A failed write into the digest surfaces as `KeyError::HashWrite`.
pub fn hash160_with<D>(data: &[u8]) -> Result<[u8; PUBKEY_HASH_LEN]>
where
    D: StreamDigest<PUBKEY_HASH_LEN> + Default,
{
    let mut digest = D::default();
    digest.write_all(&sha256(data))?;
    Ok(digest.sum())
}
