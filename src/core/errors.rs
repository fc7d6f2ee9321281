/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use crate::process::ProcessState;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Process operation result
pub type ProcessResult<T> = std::result::Result<T, ProcessError>;

/// Queue operation result
pub type QueueResult<T> = std::result::Result<T, QueueError>;

/// Crate-wide result
pub type Result<T> = std::result::Result<T, Error>;

/// Process record errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ProcessError {
    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(process::invalid_argument),
        help("The value was rejected and the record is unchanged.")
    )]
    InvalidArgument(String),

    #[error("Invalid state transition: {from} -> {to}")]
    #[diagnostic(
        code(process::invalid_state_transition),
        help("Use set_state for an unchecked overwrite.")
    )]
    InvalidStateTransition {
        from: ProcessState,
        to: ProcessState,
    },

    #[error("Process {0} not found")]
    #[diagnostic(
        code(process::not_found),
        help("The process may have been removed from the table or never existed.")
    )]
    NotFound(Pid),
}

/// Priority queue errors
#[derive(Error, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", rename_all = "snake_case")]
pub enum QueueError {
    #[error("Priority queue is empty")]
    #[diagnostic(
        code(queue::empty),
        help("Check is_empty() before calling peek or pop.")
    )]
    EmptyQueue,
}

/// Unified error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Process error: {0}")]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),

    #[error("Queue error: {0}")]
    #[diagnostic(transparent)]
    Queue(#[from] QueueError),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(config::invalid),
        help("Review the PROCESS_QUEUE_* environment variables.")
    )]
    Configuration(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(output::serialization))]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
