//! Scheduler-specific error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Not enough eligible participants: {eligible} available after excluding recent participants, need 2")]
    InsufficientCandidates { eligible: usize },

    #[error("Malformed date '{value}' in sheet '{sheet}' row {row}")]
    MalformedDate { sheet: String, row: usize, value: String },

    #[error("Persisted store not found: {location}")]
    MissingStore { location: String },

    #[error("Malformed workbook: {message}")]
    MalformedWorkbook { message: String },

    #[error("Duplicate participant name: {name}")]
    DuplicateParticipant { name: String },

    #[error("Invalid participant: {reason}")]
    InvalidParticipant { reason: String },

    #[error("A session needs two different participants, got '{name}' twice")]
    SameParticipant { name: String },

    #[error("Storage operation failed: {operation} on {location}: {message}")]
    StorageError {
        operation: String,
        location: String,
        message: String,
    },

    #[error("Workbook serialization failed: {message}")]
    WorkbookError { message: String },

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SchedulerError {
    /// Errors the user can fix by changing their input; no state was touched
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SchedulerError::InsufficientCandidates { .. }
                | SchedulerError::DuplicateParticipant { .. }
                | SchedulerError::InvalidParticipant { .. }
                | SchedulerError::SameParticipant { .. }
        )
    }

    pub(crate) fn storage(operation: &str, location: &str, message: impl ToString) -> Self {
        SchedulerError::StorageError {
            operation: operation.to_string(),
            location: location.to_string(),
            message: message.to_string(),
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        SchedulerError::MalformedWorkbook { message: message.into() }
    }
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
