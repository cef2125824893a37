use std::path::PathBuf;

use thiserror::Error;

use crate::keys::KeyError;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Key detection and conversion
    #[error(transparent)]
    Key(#[from] KeyError),

    /// Reading a key file
    #[error("failed to read key file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing an output file
    #[error("failed to write output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Creating the output directory
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Input file missing before any work started
    #[error("Input file '{}' does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// File is not in the two-line format
    #[error("File is NOT in the correct two-line format: {}", .0.display())]
    NotCanonical(PathBuf),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report serialisation
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
