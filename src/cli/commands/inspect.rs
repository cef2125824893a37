use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::keyfile::read_key_file;
use crate::keys::{CanonicalKeys, KeyResult};
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{ensure_input_exists, parse_format, OutputFormat};

/// Show key details of a file in the two-line format
#[derive(Args)]
pub struct InspectCommand {
    /// Path to the two-line I2P key file
    pub input: PathBuf,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Characters of each key line to preview (overrides config.toml)
    #[arg(long)]
    pub preview_len: Option<usize>,
}

impl InspectCommand {
    pub fn run(&self) -> AppResult<()> {
        ensure_input_exists(&self.input)?;
        let config = AppConfig::load()?;
        let preview_len = self.preview_len.unwrap_or(config.display.preview_len);

        info!("Inspecting I2P key file: {}", self.input.display());
        let keys = read_canonical(&self.input)?;
        let key_info = KeyInfo::from_keys(&keys, preview_len)?;

        print_key_info(&key_info, parse_format(&self.format))
    }
}

/// Summary of a two-line key record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyInfo {
    pub destination_preview: String,
    pub keypair_preview: String,
    /// Encoded characters per line
    pub destination_length: usize,
    pub keypair_length: usize,
    /// Decoded bytes per line
    pub destination_bytes: usize,
    pub keypair_bytes: usize,
}

impl KeyInfo {
    pub fn from_keys(keys: &CanonicalKeys, preview_len: usize) -> KeyResult<Self> {
        Ok(Self {
            destination_preview: truncate_preview(&keys.destination, preview_len),
            keypair_preview: truncate_preview(&keys.keypair, preview_len),
            destination_length: keys.destination.len(),
            keypair_length: keys.keypair.len(),
            destination_bytes: keys.destination_bytes()?.len(),
            keypair_bytes: keys.keypair_bytes()?.len(),
        })
    }
}

/// Read a key file that must already be in the two-line format
pub(super) fn read_canonical(path: &Path) -> AppResult<CanonicalKeys> {
    let data = read_key_file(path)?;
    std::str::from_utf8(&data)
        .ok()
        .and_then(CanonicalKeys::parse)
        .ok_or_else(|| AppError::NotCanonical(path.to_path_buf()))
}

/// Truncate a key line for display, marking cut text with an ellipsis
fn truncate_preview(line: &str, max_len: usize) -> String {
    match line.get(..max_len) {
        Some(prefix) if prefix.len() < line.len() => format!("{}...", prefix),
        _ => line.to_string(),
    }
}

pub(super) fn print_key_info(key_info: &KeyInfo, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(key_info)?),
        OutputFormat::Text => print_key_info_text(key_info),
    }
    Ok(())
}

fn print_key_info_text(key_info: &KeyInfo) {
    println!("\nKey Information:");
    println!("- Destination (public key): {}", key_info.destination_preview);
    println!(
        "- Destination length: {} characters ({} bytes)",
        key_info.destination_length, key_info.destination_bytes
    );
    println!(
        "- Full key length: {} characters ({} bytes)",
        key_info.keypair_length, key_info.keypair_bytes
    );
    println!("- Full key preview: {}", key_info.keypair_preview);
    println!("\nFormat: Two lines");
    println!("- Line 1: Base64-encoded destination (public key)");
    println!("- Line 2: Base64-encoded full keypair (public + private)");
}
