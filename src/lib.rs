//! Testnet key encodings
//!
//! Renders a P-256 keypair as a testnet Wallet Import Format private key and a
//! testnet pay-to-pubkey-hash address, and decodes both back.

pub mod base58;
pub mod error;
pub mod keypair;
pub mod keys;
pub mod ripemd160;
pub mod sha256;

pub use error::{KeyError, Result};

pub use keypair::KeyPair;
pub use keys::{
    ADDRESS_VERSION, PRIVATE_KEY_VERSION, PrivateScalar, PublicKeyBytes, address_to_pubkey_hash,
    decode_wif, encode_private_key_wif, encode_public_key_address,
};
pub use ripemd160::{StreamDigest, hash160};
pub use sha256::{hash256, sha256};
