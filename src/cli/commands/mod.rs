pub mod check;
pub mod convert;
pub mod format;
pub mod inspect;

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Fail early when the input key file is missing
fn ensure_input_exists(path: &Path) -> AppResult<()> {
    if !path.exists() {
        return Err(AppError::InputNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Report output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse output format string to OutputFormat enum
fn parse_format(format_str: &str) -> OutputFormat {
    match format_str.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}
