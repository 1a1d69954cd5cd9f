//! Error handling for Telebill
//!
//! This module defines the error type shared by the state store and the
//! configuration and logging layers around it.

use thiserror::Error;

/// Main error type for Telebill
#[derive(Error, Debug)]
pub enum TelebillError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("Invalid stored state for user {user_id}: {reason}")]
    InvariantViolation { user_id: i64, reason: String },

    #[error("Inconsistent state for user {user_id}: {reason}")]
    InconsistentState { user_id: i64, reason: String },
}

/// Result type alias for Telebill operations
pub type Result<T> = std::result::Result<T, TelebillError>;

impl TelebillError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            TelebillError::Config(_) => false,
            TelebillError::ConfigLoad(_) => false,
            TelebillError::Logging(_) => false,
            TelebillError::InvariantViolation { .. } => false,
            TelebillError::InconsistentState { .. } => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TelebillError::Config(_) => ErrorSeverity::Critical,
            TelebillError::ConfigLoad(_) => ErrorSeverity::Critical,
            TelebillError::InvariantViolation { .. } => ErrorSeverity::Critical,
            TelebillError::InconsistentState { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
