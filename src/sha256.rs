//! SHA-256 hash function wrapper
//! Uses the sha2 crate for a correct implementation.

use sha2::{Digest, Sha256};

/// Number of leading HASH256 bytes kept as a payload checksum
pub const CHECKSUM_LEN: usize = 4;

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Double SHA-256
pub fn hash256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// First four bytes of HASH256, appended to versioned payloads before base58
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = hash256(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;

    #[test]
    fn test_sha256_vectors() {
        let test_cases = [
            (
                b"".as_slice(),
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            ),
            (
                b"abc".as_slice(),
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ),
            (
                b"hello".as_slice(),
                "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
            ),
        ];

        for (input, expected) in test_cases {
            assert_eq!(hex::encode(sha256(input)), expected);
        }
    }

    #[test]
    fn test_hash256_vectors() {
        assert_eq!(
            hex::encode(hash256(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
        assert_eq!(hash256(b"hello"), sha256(&sha256(b"hello")));
    }

    #[test]
    fn test_checksum_is_hash256_prefix() {
        assert_eq!(hex::encode(checksum(&[0xef, 0x01])), "d57aa9b2");
        assert_eq!(hex::encode(checksum(&[0xef])), "ae9fefad");
    }

    #[quickcheck_macros::quickcheck]
    fn prop_hash256_is_deterministic(data: Vec<u8>) -> bool {
        hash256(&data) == hash256(&data)
    }

    #[quickcheck_macros::quickcheck]
    fn prop_checksum_detects_single_byte_mutation(
        payload: Vec<u8>,
        index: usize,
        delta: u8,
    ) -> TestResult {
        if payload.is_empty() || delta == 0 {
            return TestResult::discard();
        }
        let mut mutated = payload.clone();
        let i = index % mutated.len();
        mutated[i] = mutated[i].wrapping_add(delta);
        TestResult::from_bool(checksum(&payload) != checksum(&mutated))
    }
}
