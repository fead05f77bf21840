//! Base58 and Base58Check encoding/decoding

use crate::error::{KeyError, Result};
use crate::sha256::{CHECKSUM_LEN, checksum};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn alphabet_inv(c: char) -> Option<u8> {
    ALPHABET.iter().position(|&x| x as char == c).map(|i| i as u8)
}

/// Base58 encode bytes
///
/// The input is read as a big-endian integer; every leading zero byte becomes a
/// leading `1`.
pub fn encode(bytes: &[u8]) -> String {
    let mut n = BigUint::from_bytes_be(bytes);
    let fifty_eight = BigUint::from(58u8);
    let mut chars = Vec::new();

    while !n.is_zero() {
        let (quotient, remainder) = n.div_rem(&fifty_eight);
        let idx = remainder.to_usize().unwrap_or_default();
        chars.push(ALPHABET[idx]);
        n = quotient;
    }

    let num_leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();
    chars.extend(std::iter::repeat_n(ALPHABET[0], num_leading_zeros));

    chars.reverse();
    chars.into_iter().map(char::from).collect()
}

/// Base58 decode to bytes, the exact inverse of [`encode`]
pub fn decode(s: &str) -> Result<Vec<u8>> {
    let mut n = BigUint::zero();
    let fifty_eight = BigUint::from(58u8);

    for (index, character) in s.chars().enumerate() {
        let val = alphabet_inv(character).ok_or(KeyError::InvalidCharacter { character, index })?;
        n = n * &fifty_eight + BigUint::from(val);
    }

    let num_leading_ones = s.chars().take_while(|&c| c == '1').count();
    let mut result = vec![0u8; num_leading_ones];
    if !n.is_zero() {
        result.extend(n.to_bytes_be());
    }
    Ok(result)
}

/// Append the 4-byte HASH256 checksum to `payload` and base58 encode it
pub fn check_encode(payload: &[u8]) -> String {
    let mut full = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    full.extend_from_slice(payload);
    full.extend_from_slice(&checksum(payload));
    encode(&full)
}

/// Base58 decode and verify the trailing checksum, returning the payload without it
pub fn check_decode(s: &str) -> Result<Vec<u8>> {
    let mut bytes = decode(s)?;
    if bytes.len() < CHECKSUM_LEN {
        return Err(KeyError::InvalidFormat(format!(
            "Base58Check string decodes to {} bytes, shorter than its checksum",
            bytes.len()
        )));
    }

    let found = bytes.split_off(bytes.len() - CHECKSUM_LEN);
    let expected = checksum(&bytes);
    if found != expected {
        return Err(KeyError::InvalidChecksum {
            expected: hex::encode(expected),
            found: hex::encode(found),
        });
    }
    Ok(bytes)
}
