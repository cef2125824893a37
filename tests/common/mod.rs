//! Common Test Utilities
//!
//! Fixture builders shared by the integration tests.

use i2pkeys_converter::keys::encode;
use std::path::{Path, PathBuf};

/// Deterministic binary key material that is never valid I2P Base64 text
pub fn binary_key(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 13 % 256) as u8).collect()
}

/// I2P Base64 text for `len` bytes of binary key material
pub fn encoded_key(len: usize) -> String {
    encode(&binary_key(len))
}

/// Write a fixture file into `dir` and return its path
pub fn write_fixture(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
