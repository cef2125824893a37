//! I2P Base64 codec
//!
//! I2P uses standard Base64 bit packing and `=` padding, but substitutes `-`
//! and `~` for the `+` and `/` symbols. This module wraps a `base64` engine
//! configured with that alphabet.

use base64::{
    alphabet::Alphabet,
    engine::{general_purpose::GeneralPurpose, DecodePaddingMode, GeneralPurposeConfig},
    Engine,
};

pub use base64::DecodeError;

/// The 64 encoding symbols in ordinal order (0-63)
pub const ALPHABET_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-~";

/// Padding symbol appended to incomplete final groups
pub const PAD_SYMBOL: char = '=';

const I2P_ALPHABET: Alphabet = match Alphabet::new(ALPHABET_SYMBOLS) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("I2P base64 alphabet must contain 64 distinct printable symbols"),
};

/// Base64 engine for the I2P alphabet
///
/// Padding is always written on encode and must be present and canonical on
/// decode. Non-zero trailing bits in the last symbol are tolerated.
pub const I2P_BASE64: GeneralPurpose = GeneralPurpose::new(
    &I2P_ALPHABET,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical)
        .with_decode_allow_trailing_bits(true),
);

/// Encode arbitrary bytes as I2P Base64
pub fn encode(data: &[u8]) -> String {
    I2P_BASE64.encode(data)
}

/// Decode I2P Base64 text back into bytes
///
/// Fails on any symbol outside the I2P alphabet (the standard `+` and `/`
/// included), on truncated input and on misplaced padding.
pub fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    I2P_BASE64.decode(text)
}

/// True for the 64 alphabet symbols, excluding padding
pub fn is_alphabet_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '~'
}
