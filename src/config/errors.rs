//! Error types for settings parsing

use thiserror::Error;

/// Errors that can occur while building listing settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Mode name outside the supported presentation variants
    #[error("Unknown mode '{0}', expected one of: panel, list")]
    InvalidMode(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error while reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file extension is neither YAML nor TOML
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),
}

impl ConfigError {
    /// Create a new invalid mode error
    pub fn invalid_mode<S: Into<String>>(mode: S) -> Self {
        Self::InvalidMode(mode.into())
    }
}
