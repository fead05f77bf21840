//! Unified error types for key encoding

use thiserror::Error;

/// Main error type for the key encoding library
#[derive(Debug, Error)]
pub enum KeyError {
    /// The public key hash stage failed to absorb its input.
    #[error("Hash write error: {0}")]
    HashWrite(#[from] std::io::Error),

    #[error("Invalid base58 character {character:?} at position {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("Invalid checksum: expected {expected}, found {found}")]
    InvalidChecksum { expected: String, found: String },

    #[error("Unexpected version byte: expected {expected:#04x}, found {found:#04x}")]
    VersionMismatch { expected: u8, found: u8 },

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<hex::FromHexError> for KeyError {
    fn from(e: hex::FromHexError) -> Self {
        KeyError::Parse(e.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, KeyError>;
