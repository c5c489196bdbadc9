#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Wlscan Configuration
//!
//! This crate provides configuration management for Wlscan.
//! It handles loading, saving, and managing configuration files that specify:
//! - Code generation parameters (runtime module path, doc comments)
//! - Logging configuration
//! - Validation policy for unusual protocol shapes
//!
//! Configuration is stored in TOML format. Every section is optional, so an
//! empty file is a valid configuration.

use std::path::{Path, PathBuf};

use semantics::DestructorArgsPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use codegen::DEFAULT_RUNTIME_MODULE;

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
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
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Code generation settings
    pub codegen: CodegenConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Validation policy
    pub validation: ValidationConfig,
}

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Module whose items the generated preamble glob-imports
    pub runtime_module: String,
    /// Emit request summaries as doc comments
    pub emit_docs: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ValidationConfig {
    /// Destructor requests that declare arguments: "reject" or "ignore"
    pub destructor_args: DestructorArgsPolicy,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self { runtime_module: DEFAULT_RUNTIME_MODULE.to_string(), emit_docs: false }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "warn".to_string() } }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/wlscan/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir =
            dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("wlscan");
        Ok(config_dir.join("config.toml"))
    }

    /// Load the explicit file if given, else the default path if it exists, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Ok(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}
