//! I2P Keys Converter
//!
//! Formats I2P key files into the two-line layout (destination, then full
//! keypair, both in I2P Base64) expected by I2P client libraries.

pub mod cli;
pub mod config;
pub mod errors;
pub mod keyfile;
pub mod keys;
