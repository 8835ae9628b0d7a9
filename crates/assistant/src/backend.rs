use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// No completion backend has been configured (e.g. missing API key).
    #[error("completion backend not configured")]
    Unconfigured,

    /// The backend was configured but the call failed.
    #[error("completion backend unavailable: {0}")]
    Unavailable(String),
}

/// Opaque text-completion collaborator.
///
/// Implementations live outside this crate (HTTP clients, test doubles). The
/// assistant only depends on this contract.
pub trait CompletionBackend: Send + Sync {
    fn complete(
        &self,
        system_prompt: &str,
        history: &[String],
        message: &str,
    ) -> Result<String, BackendError>;
}

/// Default backend when no API key is present: always unconfigured.
#[derive(Debug, Copy, Clone, Default)]
pub struct UnconfiguredBackend;

impl CompletionBackend for UnconfiguredBackend {
    fn complete(
        &self,
        _system_prompt: &str,
        _history: &[String],
        _message: &str,
    ) -> Result<String, BackendError> {
        Err(BackendError::Unconfigured)
    }
}
