//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business/domain failures (validation,
/// policy denials, workflow violations). Transport concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The actor's role lacks the capability for the attempted action.
    #[error("unauthorized")]
    Unauthorized,

    /// The actor and the resource belong to different businesses.
    ///
    /// Kept separate from [`DomainError::Unauthorized`] so logs can tell
    /// "role lacks capability" apart from "wrong business".
    #[error("cross-tenant access denied")]
    CrossTenant,

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// A status change outside the allowed transition table was attempted.
    #[error("illegal transition: {0}")]
    IllegalTransition(String),

    /// A conflict occurred (e.g. duplicate unique key).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A user attempted to delete their own account.
    #[error("self-deletion forbidden")]
    SelfDeletionForbidden,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn illegal_transition(msg: impl Into<String>) -> Self {
        Self::IllegalTransition(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
