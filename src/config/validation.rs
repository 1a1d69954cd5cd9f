//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{Result, TelebillError};

/// Upper bound on the capacity reserved up front by the state store
pub const MAX_INITIAL_CAPACITY: usize = 1_000_000;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_logging_config(&settings.logging)?;
    validate_state_config(&settings.state)?;

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(TelebillError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(TelebillError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    if config.directory.is_some() && config.file_name.is_empty() {
        return Err(TelebillError::Config(
            "Log file name is required when a log directory is set".to_string(),
        ));
    }

    Ok(())
}

/// Validate state store configuration
fn validate_state_config(config: &super::StateConfig) -> Result<()> {
    if config.initial_capacity > MAX_INITIAL_CAPACITY {
        return Err(TelebillError::Config(format!(
            "Initial state capacity too large: {} > {}",
            config.initial_capacity, MAX_INITIAL_CAPACITY
        )));
    }

    Ok(())
}
