//! Key file I/O
//!
//! Whole-file wrappers around [`crate::keys`]: read the source, convert in
//! memory, create the output directory and write the result. Nothing is
//! written when conversion fails.

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::OutputConfig;
use crate::errors::{AppError, AppResult};
use crate::keys::{self, is_canonical};

/// Permissions applied to written key files and created directories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub file_mode: u32,
    pub dir_mode: u32,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::from(&OutputConfig::default())
    }
}

impl From<&OutputConfig> for OutputOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            file_mode: config.file_mode,
            dir_mode: config.dir_mode,
        }
    }
}

/// What a conversion did with its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// Input was reformatted into the two-line layout
    Converted,
    /// Input was already in the two-line layout and copied verbatim
    PassedThrough,
    /// Input was already in the two-line layout and is its own output
    Unchanged,
}

/// Default output location: the input path with `suffix` appended
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut path = input.as_os_str().to_os_string();
    path.push(suffix);
    PathBuf::from(path)
}

/// Read a whole key file
pub fn read_key_file(path: &Path) -> AppResult<Vec<u8>> {
    fs::read(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a key file, creating parent directories as needed
///
/// The file mode only applies to newly created files.
pub fn write_key_file(path: &Path, contents: &[u8], options: &OutputOptions) -> AppResult<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(options.dir_mode);
        }
        builder.create(dir).map_err(|source| AppError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let mut open_options = OpenOptions::new();
    open_options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        open_options.mode(options.file_mode);
    }

    let write_err = |source| AppError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = open_options.open(path).map_err(write_err)?;
    file.write_all(contents).map_err(write_err)?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

/// Convert a key file of any supported layout into the two-line format
///
/// Binary files are encoded, single-blob encoded files are split, and files
/// already in the two-line format are copied as-is.
pub fn convert_key_file(
    input: &Path,
    output: &Path,
    options: &OutputOptions,
) -> AppResult<ConversionOutcome> {
    let data = read_key_file(input)?;
    let already_canonical = std::str::from_utf8(&data).is_ok_and(is_canonical);

    let formatted = keys::transform(&data)?;
    write_key_file(output, formatted.as_bytes(), options)?;

    if already_canonical {
        info!("{} already in two-line format, copied", input.display());
        Ok(ConversionOutcome::PassedThrough)
    } else {
        info!("Converted {} into {}", input.display(), output.display());
        Ok(ConversionOutcome::Converted)
    }
}

/// Format a key file that already holds I2P Base64 text
///
/// Stray characters are stripped and the first non-blank line is split into
/// destination and keypair. Binary content is never re-encoded.
pub fn format_key_file(
    input: &Path,
    output: &Path,
    options: &OutputOptions,
) -> AppResult<ConversionOutcome> {
    let data = read_key_file(input)?;
    let text = String::from_utf8_lossy(&data);

    if is_canonical(&text) {
        if input == output {
            info!("{} already in two-line format", input.display());
            return Ok(ConversionOutcome::Unchanged);
        }
        write_key_file(output, &data, options)?;
        return Ok(ConversionOutcome::PassedThrough);
    }

    let formatted = keys::format_encoded(&text)?;
    write_key_file(output, formatted.as_bytes(), options)?;
    info!("Formatted {} into {}", input.display(), output.display());
    Ok(ConversionOutcome::Converted)
}
