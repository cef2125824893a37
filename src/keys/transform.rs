//! Two-line key assembly
//!
//! Turns binary key files, single-blob I2P Base64 text and noisy text into the
//! two-line layout, deriving the destination from the fixed-length prefix of
//! the full keypair.

use tracing::debug;

use super::codec;
use super::detection::{looks_like_encoded, sanitize};
use super::error::{KeyError, KeyResult};
use super::format::is_canonical;

/// Encoded length of an I2P destination
///
/// The destination is assumed to be the first `DESTINATION_ENCODED_LEN`
/// characters of the encoded keypair. No key-type parsing backs this up.
pub const DESTINATION_ENCODED_LEN: usize = 516;

/// Build the two-line record for a complete encoded keypair
///
/// Returns `None` when the key is shorter than a destination.
pub fn split_destination(complete_key: &str) -> Option<String> {
    let destination = complete_key.get(..DESTINATION_ENCODED_LEN)?;
    Some(format!("{}\n{}", destination, complete_key))
}

fn too_short(length: usize) -> KeyError {
    KeyError::InsufficientKeyLength {
        length,
        required: DESTINATION_ENCODED_LEN,
    }
}

/// Convert raw key file bytes into the two-line format
///
/// 1. Content already in the two-line format is returned unchanged.
/// 2. Content that is I2P Base64 as a whole has its first line split into
///    destination and keypair.
/// 3. Anything else, and encoded text too short to split, is treated as
///    binary: the raw bytes are encoded and the result split.
pub fn transform(raw: &[u8]) -> KeyResult<String> {
    if let Ok(text) = std::str::from_utf8(raw) {
        if is_canonical(text) {
            debug!("Key data already in two-line format, passing through");
            return Ok(text.to_string());
        }

        if looks_like_encoded(text) {
            let complete_key = text.split('\n').next().unwrap_or_default();
            if let Some(formatted) = split_destination(complete_key) {
                debug!(
                    "Split {}-character encoded key into destination and keypair",
                    complete_key.len()
                );
                return Ok(formatted);
            }
            // Re-encodes the raw bytes, not the decoded text
            debug!(
                "Encoded key has {} characters, treating content as binary",
                complete_key.len()
            );
        }
    }

    let complete_key = codec::encode(raw);
    debug!(
        "Encoded {} bytes of binary key data into {} characters",
        raw.len(),
        complete_key.len()
    );
    split_destination(&complete_key).ok_or_else(|| too_short(complete_key.len()))
}

/// Format text that already holds an I2P Base64 key
///
/// Unlike [`transform`] this never re-encodes: the text is sanitised and its
/// first non-blank line is used as the complete keypair.
pub fn format_encoded(text: &str) -> KeyResult<String> {
    if is_canonical(text) {
        return Ok(text.to_string());
    }

    let cleaned = sanitize(text);
    let complete_key = cleaned
        .split('\n')
        .find(|line| !line.trim().is_empty())
        .unwrap_or_default();

    split_destination(complete_key).ok_or_else(|| too_short(complete_key.len()))
}
