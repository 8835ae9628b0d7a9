//! `bazaar-assistant`
//!
//! **Responsibility:** the catalog-grounded shopping assistant boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not mutate domain state.
//! - It only ever sees an approved-catalog snapshot, never the stores.
//! - The completion backend is an opaque collaborator behind a trait; when it
//!   is unreachable or unconfigured the assistant degrades to a static apology
//!   instead of surfacing an error.

pub mod backend;
pub mod prompt;
pub mod snapshot;

pub use backend::{BackendError, CompletionBackend, UnconfiguredBackend};
pub use snapshot::{CatalogSnapshot, SnapshotItem};

/// The shopping assistant.
///
/// Composes a grounding prompt from the snapshot and delegates the actual text
/// completion to the backend.
#[derive(Debug)]
pub struct Assistant<B> {
    backend: B,
}

/// Static reply when the completion backend is not configured.
pub const UNCONFIGURED_REPLY: &str =
    "I'm sorry, the shopping assistant is not configured right now.";

/// Static reply when the completion backend fails.
pub const ERROR_REPLY: &str = "Sorry, I ran into a problem answering that. Please try again.";

/// Static reply when the backend returns an empty completion.
pub const EMPTY_REPLY: &str = "I'm having trouble thinking right now.";

impl<B: CompletionBackend> Assistant<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Answer a shopping question grounded in the snapshot.
    ///
    /// Never fails: backend problems degrade to a static apology so the chat
    /// widget always has something to show.
    pub fn answer(&self, history: &[String], message: &str, snapshot: &CatalogSnapshot) -> String {
        let system_prompt = prompt::system_prompt(snapshot);

        match self.backend.complete(&system_prompt, history, message) {
            Ok(reply) if reply.trim().is_empty() => EMPTY_REPLY.to_string(),
            Ok(reply) => reply,
            Err(BackendError::Unconfigured) => UNCONFIGURED_REPLY.to_string(),
            Err(BackendError::Unavailable(_)) => ERROR_REPLY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::ProductId;

    struct Scripted(&'static str);

    impl CompletionBackend for Scripted {
        fn complete(
            &self,
            _system_prompt: &str,
            _history: &[String],
            _message: &str,
        ) -> Result<String, BackendError> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl CompletionBackend for Failing {
        fn complete(
            &self,
            _system_prompt: &str,
            _history: &[String],
            _message: &str,
        ) -> Result<String, BackendError> {
            Err(BackendError::Unavailable("connection refused".to_string()))
        }
    }

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot {
            items: vec![SnapshotItem {
                id: ProductId::new(),
                name: "Deluxe Burger".to_string(),
                price_cents: 1299,
                description: "Double patty".to_string(),
            }],
        }
    }

    #[test]
    fn happy_path_returns_backend_reply() {
        let assistant = Assistant::new(Scripted("Try the Deluxe Burger!"));
        let reply = assistant.answer(&[], "what's good?", &snapshot());
        assert_eq!(reply, "Try the Deluxe Burger!");
    }

    #[test]
    fn unconfigured_backend_degrades_to_static_apology() {
        let assistant = Assistant::new(UnconfiguredBackend);
        let reply = assistant.answer(&[], "what's good?", &snapshot());
        assert_eq!(reply, UNCONFIGURED_REPLY);
    }

    #[test]
    fn backend_failure_degrades_to_static_apology() {
        let assistant = Assistant::new(Failing);
        let reply = assistant.answer(&[], "what's good?", &snapshot());
        assert_eq!(reply, ERROR_REPLY);
    }

    #[test]
    fn blank_completion_degrades_to_static_reply() {
        let assistant = Assistant::new(Scripted("   "));
        let reply = assistant.answer(&[], "what's good?", &snapshot());
        assert_eq!(reply, EMPTY_REPLY);
    }
}
