use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// I2P Keys Converter - Format I2P keys for I2P client libraries
#[derive(Parser)]
#[command(name = "i2pkeys-converter")]
#[command(about = "I2P Keys Converter - Format I2P keys for I2P client libraries")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Convert a binary or single-line key file into the two-line format
    Convert(commands::convert::ConvertCommand),
    /// Check if a key file is already in the two-line format
    Check(commands::check::CheckCommand),
    /// Format an I2P Base64 text key file without re-encoding it
    Format(commands::format::FormatCommand),
    /// Show key details of a file in the two-line format
    Inspect(commands::inspect::InspectCommand),
}

pub fn run() -> AppResult<()> {
    // Initialise tracing subscriber to capture info!() macros
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(command) => command.run(),
        Commands::Check(command) => command.run(),
        Commands::Format(command) => command.run(),
        Commands::Inspect(command) => command.run(),
    }
}
