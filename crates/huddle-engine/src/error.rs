//! Error types for huddle-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Invalid time '{input}': {reason}")]
    InvalidTime { input: String, reason: String },

    #[error("End time must be after start time (got {start} - {end})")]
    InvalidRange { start: String, end: String },

    #[error("Unknown weekday: {0} (expected Monday through Friday)")]
    UnknownWeekday(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
