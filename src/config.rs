use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub display: DisplayConfig,
}

/// Where and how converted key files are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Appended to the input path when no output path is given
    pub suffix: String,
    /// Unix permission bits for new key files
    pub file_mode: u32,
    /// Unix permission bits for created output directories
    pub dir_mode: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Characters of each key line shown in verbose output
    pub preview_len: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: ".formatted".to_string(),
            file_mode: 0o600,
            dir_mode: 0o755,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { preview_len: 40 }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let output = OutputConfig::default();
        let display = DisplayConfig::default();
        let config = Config::builder()
            .set_default("output.suffix", output.suffix)?
            .set_default("output.file_mode", output.file_mode as i64)?
            .set_default("output.dir_mode", output.dir_mode as i64)?
            .set_default("display.preview_len", display.preview_len as i64)?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // I2PKEYS_OUTPUT__SUFFIX, I2PKEYS_DISPLAY__PREVIEW_LEN, ...
            .add_source(
                Environment::with_prefix("I2PKEYS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        // An empty suffix would make the default output path the input path
        if app_config.output.suffix.is_empty() {
            return Err(ConfigError::Message(
                "output.suffix must not be empty".to_string(),
            ));
        }

        Ok(app_config)
    }
}
