//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub state: StateConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily-rolling log files; stdout only when unset
    pub directory: Option<String>,
    pub file_name: String,
    pub json: bool,
}

/// User state store configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StateConfig {
    /// Number of users to reserve room for up front
    pub initial_capacity: usize,
    /// Reject states whose bill fields disagree with their kind
    pub strict_consistency: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_name: "telebill.log".to_string(),
            json: false,
        }
    }
}

impl Settings {
    /// Load settings from `config.toml` in the working directory and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Load settings from an explicit file, falling back to `config.toml` when `None`.
    ///
    /// Variables from a `.env` file are applied first; real environment
    /// variables take precedence over it.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        match path {
            Some(path) => Self::build(config::File::from(path).required(true)),
            None => Self::build(config::File::with_name("config").required(false)),
        }
    }

    fn build<F>(file: F) -> Result<Self, config::ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let settings = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("TELEBILL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::TelebillError> {
        super::validation::validate_settings(self)
    }
}
