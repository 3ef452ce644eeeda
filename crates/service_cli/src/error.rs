//! CLI error types

use schedule_engine::schedules::ScheduleError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `delivery-schedule` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
