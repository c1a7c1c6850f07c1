//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while validating task input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The patch carries neither a name nor a status.
    #[error("empty patch")]
    EmptyPatch,

    /// The patch status is not one of `START` or `END`.
    #[error("invalid status '{0}', expected START or END")]
    InvalidStatus(String),

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task name exceeds the 255-character storage limit.
    #[error("task name exceeds 255 character limit: {0}")]
    TaskNameTooLong(String),
}

/// Error returned while parsing task statuses from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
