//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Directory access failed (lock poisoned, etc.).
    #[error("Employee directory error")]
    DirectoryLockError,

    /// The reporter could not emit a line.
    #[error("Reporting failed: {reason}")]
    ReportFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryLockError => vec![
                "The employee directory is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ReportFailed { reason } => vec![
                format!("Could not write report output: {}", reason),
                "Check that stdout is writable".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryLockError | Self::ReportFailed { .. } => ErrorCategory::Internal,
        }
    }
}
