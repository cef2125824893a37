//! Key conversion error types

use super::codec::DecodeError;

/// Result type for key conversion operations
pub type KeyResult<T> = Result<T, KeyError>;

/// Key conversion error types
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("Base64 decoding error: {0}")]
    Decode(#[from] DecodeError),

    #[error(
        "key data too short to extract public key portion: {length} encoded characters, need at least {required}"
    )]
    InsufficientKeyLength { length: usize, required: usize },
}
