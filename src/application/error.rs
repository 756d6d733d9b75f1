// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Errors surfaced to callers of the command facade. None of them is retried
/// inside the core; a `ConcurrencyConflict` asks the caller to refetch and
/// present the decision again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("action not available: {0}")]
    IllegalTransition(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("concurrency conflict: {0}")]
    ConcurrencyConflict(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::ConcurrencyConflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    /// Stable machine-readable tag for the taxonomy.
    pub fn kind(&self) -> &'static str {
        match self {
            ApplicationError::Validation(_) => "validation_error",
            ApplicationError::IllegalTransition(_) => "illegal_transition",
            ApplicationError::Unauthorized(_) => "unauthorized",
            ApplicationError::Unauthenticated(_) => "unauthenticated",
            ApplicationError::ConcurrencyConflict(_) => "concurrency_conflict",
            ApplicationError::NotFound(_) => "not_found",
            ApplicationError::Infrastructure(_) => "infrastructure",
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::IllegalTransition(msg) => Self::IllegalTransition(msg),
            DomainError::Unauthorized(msg) => Self::Unauthorized(msg),
            DomainError::Conflict(msg) => Self::ConcurrencyConflict(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_one_to_one() {
        assert_eq!(
            ApplicationError::from(DomainError::Conflict("stale".into())),
            ApplicationError::ConcurrencyConflict("stale".into())
        );
        assert_eq!(
            ApplicationError::from(DomainError::IllegalTransition("no".into())).kind(),
            "illegal_transition"
        );
        assert_eq!(
            ApplicationError::from(DomainError::Persistence("down".into())).kind(),
            "infrastructure"
        );
    }
}
