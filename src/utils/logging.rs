//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the state store.

use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::config::LoggingConfig;
use crate::models::UserStateKind;
use crate::utils::errors::{Result, TelebillError};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the non-blocking file writer alive; logs stop reaching the file once dropped
#[derive(Debug)]
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    let filter = EnvFilter::try_new(&config.level).map_err(|e| {
        TelebillError::Logging(format!("invalid filter '{}': {}", config.level, e))
    })?;

    let mut layers: Vec<BoxedLayer> = Vec::new();
    layers.push(if config.json {
        fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        fmt::layer().with_writer(std::io::stdout).boxed()
    });

    let file_guard = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, &config.file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            layers.push(if config.json {
                fmt::layer().json().with_writer(non_blocking).boxed()
            } else {
                fmt::layer().with_ansi(false).with_writer(non_blocking).boxed()
            });
            Some(guard)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| TelebillError::Logging(e.to_string()))?;

    info!(
        level = %config.level,
        directory = config.directory.as_deref(),
        json = config.json,
        "Logging initialized"
    );
    Ok(LoggingGuard { _file_guard: file_guard })
}

/// Log a change of a user's conversational state
pub fn log_state_transition(user_id: i64, from: UserStateKind, to: UserStateKind) {
    if from == to {
        debug!(user_id = user_id, kind = %to, "User state updated");
    } else {
        info!(user_id = user_id, from = %from, to = %to, "User state transition");
    }
}

/// Log removal of a user's conversational state
pub fn log_state_cleared(user_id: i64, previous: Option<UserStateKind>) {
    match previous {
        Some(kind) => info!(user_id = user_id, from = %kind, "User state cleared"),
        None => debug!(user_id = user_id, "No user state to clear"),
    }
}
