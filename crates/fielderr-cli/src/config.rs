//! Configuration management for the CLI
//!
//! This module handles loading and merging configuration from:
//! - Default values
//! - Configuration files (TOML/YAML/JSON)
//! - Environment variables
//! - Command-line arguments

use crate::cli::{ConfigFormat, OutputFormat};
use crate::error::{Error, Result};
use fielderr_core::{ConversionContext, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conversion settings
    pub conversion: ConversionConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Conversion defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Path every converted error is rooted at
    pub base_path: FieldPath,

    /// Only keep errors under this prefix, with the prefix removed
    pub ignore_prefix: FieldPath,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,

    /// Log file path
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
        }
    }
}

impl ConversionConfig {
    /// Build a conversion context, letting command-line values win
    pub fn context(&self, base_path: Option<&str>, ignore_prefix: Option<&str>) -> ConversionContext {
        let base_path = base_path
            .map(FieldPath::parse)
            .unwrap_or_else(|| self.base_path.clone());
        let ignore_prefix = ignore_prefix
            .map(FieldPath::parse)
            .unwrap_or_else(|| self.ignore_prefix.clone());

        ConversionContext::new(base_path).with_ignore_prefix(ignore_prefix)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => toml::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("json") => serde_json::from_str(&content)?,
            _ => {
                return Err(Error::InvalidFormat {
                    path: path.to_path_buf(),
                    expected: "TOML, YAML or JSON".to_string(),
                })
            }
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                // Logging is not initialised yet, so report straight to stderr
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::load()?,
        };
        config.merge_with_env();
        Ok(config)
    }

    /// Get default configuration file paths to check
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".fielderr.toml"),
            PathBuf::from(".fielderr.yaml"),
            PathBuf::from(".fielderr.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let fielderr_dir = config_dir.join("fielderr");
            paths.push(fielderr_dir.join("config.toml"));
            paths.push(fielderr_dir.join("config.yaml"));
            paths.push(fielderr_dir.join("config.json"));
        }

        paths
    }

    /// Apply environment overrides
    pub fn merge_with_env(&mut self) {
        if let Ok(base_path) = std::env::var("FIELDERR_BASE_PATH") {
            self.conversion.base_path = FieldPath::parse(&base_path);
        }

        if let Ok(ignore_prefix) = std::env::var("FIELDERR_IGNORE_PREFIX") {
            self.conversion.ignore_prefix = FieldPath::parse(&ignore_prefix);
        }
    }

    /// Render the configuration in the given format
    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        let rendered = match format {
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
        };
        Ok(rendered)
    }
}
