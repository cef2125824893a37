use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::keyfile::{convert_key_file, default_output_path, ConversionOutcome, OutputOptions};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::inspect::{print_key_info, read_canonical, KeyInfo};
use super::{ensure_input_exists, parse_format};

/// Convert a binary or single-line key file into the two-line format
#[derive(Args)]
pub struct ConvertCommand {
    /// Path to the I2P key file
    pub input: PathBuf,

    /// Path to save the formatted key (defaults to <input>.formatted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output with key details
    #[arg(short, long)]
    pub verbose: bool,

    /// Key details format when --verbose is set: text, json
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl ConvertCommand {
    pub fn run(&self) -> AppResult<()> {
        ensure_input_exists(&self.input)?;

        let config = AppConfig::load()?;
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input, &config.output.suffix));

        println!("Formatting I2P key file: {}", self.input.display());
        println!("Output file: {}", output.display());

        let outcome = convert_key_file(&self.input, &output, &OutputOptions::from(&config.output))?;
        info!("Conversion outcome: {:?}", outcome);

        // Verify the result
        let keys = read_canonical(&output)?;
        match outcome {
            ConversionOutcome::Converted => {
                println!("Conversion successful - key is now in the correct format")
            }
            _ => println!("Key was already in the correct format - copied unchanged"),
        }

        if self.verbose {
            let key_info = KeyInfo::from_keys(&keys, config.display.preview_len)?;
            print_key_info(&key_info, parse_format(&self.format))?;
        }

        Ok(())
    }
}
