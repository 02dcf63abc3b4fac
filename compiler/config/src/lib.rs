#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Typegen Configuration
//!
//! This crate provides configuration management for typegen.
//! It handles loading, saving, and managing configuration files that specify:
//! - Where generated declarations are written
//! - Whether and how the generated source is formatted
//! - Logging configuration
//! - Overrides for the scalar type mapping table
//!
//! Configuration is stored in TOML format. Every section is optional, so a
//! file only needs the keys it wants to change.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default directory that receives `index.ts`
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "./types";

/// Default formatter command
pub const DEFAULT_FORMATTER_COMMAND: &str = "prettier";

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the configuration file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub generator: GeneratorConfig,
    /// Formatter settings
    pub formatter: FormatterConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Scalar type overrides, source type name to target type expression
    pub type_map: BTreeMap<String, String>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory that receives the generated file
    pub output_directory: PathBuf,
}

/// Formatter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Run the formatter over the generated source before writing
    pub enabled: bool,
    /// Formatter command line, e.g. `prettier` or `npx prettier`
    pub command: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log file path (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self { Self { output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY) } }
}

impl Default for FormatterConfig {
    fn default() -> Self { Self { enabled: true, command: DEFAULT_FORMATTER_COMMAND.to_string() } }
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "info".to_string(), file: None } }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> { Ok(toml::from_str(contents)?) }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/typegen/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir =
            dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("typegen");
        Ok(config_dir.join("config.toml"))
    }

    /// Load the file at the default path if it exists, otherwise defaults
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.is_file() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
