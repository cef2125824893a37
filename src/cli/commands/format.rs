use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::keyfile::{default_output_path, format_key_file, ConversionOutcome, OutputOptions};
use clap::Args;
use std::path::PathBuf;

use super::ensure_input_exists;

/// Format an I2P Base64 text key file without re-encoding it
#[derive(Args)]
pub struct FormatCommand {
    /// Path to the I2P Base64 key file
    pub input: PathBuf,

    /// Path to save the formatted key (defaults to <input>.formatted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl FormatCommand {
    pub fn run(&self) -> AppResult<()> {
        ensure_input_exists(&self.input)?;

        let config = AppConfig::load()?;
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input, &config.output.suffix));

        let outcome = format_key_file(&self.input, &output, &OutputOptions::from(&config.output))?;
        match outcome {
            ConversionOutcome::Converted => println!("Formatted key written to: {}", output.display()),
            ConversionOutcome::PassedThrough => {
                println!("Key already formatted, copied to: {}", output.display())
            }
            ConversionOutcome::Unchanged => println!("Key already formatted, nothing to do"),
        }

        Ok(())
    }
}
