use crate::errors::{AppError, AppResult};
use crate::keyfile::read_key_file;
use crate::keys::is_canonical;
use clap::Args;
use std::path::PathBuf;

use super::ensure_input_exists;

/// Check if a key file is already in the two-line format
#[derive(Args)]
pub struct CheckCommand {
    /// Path to the I2P key file
    pub input: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> AppResult<()> {
        ensure_input_exists(&self.input)?;

        let data = read_key_file(&self.input)?;
        let canonical = std::str::from_utf8(&data).is_ok_and(is_canonical);
        if !canonical {
            return Err(AppError::NotCanonical(self.input.clone()));
        }

        println!("File IS in the correct two-line format");
        Ok(())
    }
}
