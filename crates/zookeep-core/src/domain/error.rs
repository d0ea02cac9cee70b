use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (values only, no sources)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Note the asymmetry with `Animal::set_age`: invalid age is *not* an error
/// anywhere — it is tolerated with a diagnostic. Only genuinely unanswerable
/// requests (unknown names, invalid records) surface here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ── Validation errors ────────────────────────────────────────────────
    #[error("Invalid employee record: {0}")]
    InvalidEmployee(String),

    // ── Not-found / unknown-name errors ──────────────────────────────────
    #[error("unknown animal kind: {0}")]
    UnknownKind(String),

    #[error("unknown salary bracket: {0}")]
    UnknownBracket(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidEmployee(msg) => vec![
                "Check the employee record".into(),
                format!("Details: {}", msg),
            ],
            Self::UnknownKind(kind) => vec![
                format!("'{}' is not a registered animal kind", kind),
                "Known kinds: canidae, dog".into(),
            ],
            Self::UnknownBracket(bracket) => vec![
                format!("'{}' is not a salary bracket", bracket),
                "Use one of: lower, middle, upper".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidEmployee(_) => ErrorCategory::Validation,
            Self::UnknownKind(_) | Self::UnknownBracket(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
