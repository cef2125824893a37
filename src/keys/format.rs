//! Canonical two-line key file format
//!
//! ```text
//! <destination: I2P Base64 public key>
//! <keypair: I2P Base64 full keypair (public + private)>
//! ```

use std::fmt;

use super::codec;
use super::detection::looks_like_encoded;
use super::error::KeyResult;

/// Check if content is already in the two-line format
///
/// Surrounding whitespace is trimmed before splitting, so a single trailing
/// newline is accepted.
pub fn is_canonical(content: &str) -> bool {
    CanonicalKeys::parse(content).is_some()
}

/// Parsed view of a two-line key record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalKeys {
    /// Line 1: the destination (public key)
    pub destination: String,
    /// Line 2: the full keypair
    pub keypair: String,
}

impl CanonicalKeys {
    /// Parse content that satisfies the two-line format
    ///
    /// Returns `None` unless the trimmed content splits into exactly two
    /// lines that are each valid I2P Base64.
    pub fn parse(content: &str) -> Option<Self> {
        let mut lines = content.trim().split('\n');
        let (destination, keypair) = match (lines.next(), lines.next(), lines.next()) {
            (Some(destination), Some(keypair), None) => (destination, keypair),
            _ => return None,
        };

        if !looks_like_encoded(destination) || !looks_like_encoded(keypair) {
            return None;
        }

        Some(Self {
            destination: destination.trim().to_string(),
            keypair: keypair.trim().to_string(),
        })
    }

    pub fn destination_bytes(&self) -> KeyResult<Vec<u8>> {
        Ok(codec::decode(&self.destination)?)
    }

    pub fn keypair_bytes(&self) -> KeyResult<Vec<u8>> {
        Ok(codec::decode(&self.keypair)?)
    }
}

impl fmt::Display for CanonicalKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.destination, self.keypair)
    }
}
