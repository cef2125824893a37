//! I2P key format detection and conversion
//!
//! Pure, in-memory transformations between raw key bytes, I2P Base64 text and
//! the two-line layout expected by I2P client libraries. File access lives in
//! [`crate::keyfile`].

pub mod codec;
pub mod detection;
pub mod error;
pub mod format;
pub mod transform;

pub use codec::{decode, encode, DecodeError};
pub use detection::{looks_like_encoded, sanitize};
pub use error::{KeyError, KeyResult};
pub use format::{is_canonical, CanonicalKeys};
pub use transform::{format_encoded, split_destination, transform, DESTINATION_ENCODED_LEN};
