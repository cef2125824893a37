//! I2P Base64 detection helpers
//!
//! Syntactic checks used to decide whether key file content is already
//! I2P Base64 text or raw binary that still needs encoding.

use super::codec::{self, PAD_SYMBOL};

/// True for every character that may appear in I2P Base64 text
fn is_encoded_char(c: char) -> bool {
    codec::is_alphabet_symbol(c) || c == PAD_SYMBOL
}

/// Check if text appears to be I2P Base64
///
/// Surrounding whitespace is ignored. The remaining text must be non-empty,
/// consist only of alphabet symbols and `=`, and decode cleanly. Decode
/// failures are reported as `false`; use [`codec::decode`] to see why.
pub fn looks_like_encoded(text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    if !text.chars().all(is_encoded_char) {
        return false;
    }

    codec::decode(text).is_ok()
}

/// Strip everything except I2P Base64 characters and newlines
///
/// Best-effort cleanup for noisy text input; the result is not guaranteed
/// to decode.
pub fn sanitize(text: &str) -> String {
    text.trim()
        .chars()
        .filter(|&c| is_encoded_char(c) || c == '\n')
        .collect()
}
