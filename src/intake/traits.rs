//! Trait abstraction for the intake service to enable mocking in tests

use crate::state::RegistrationDraft;
use async_trait::async_trait;

/// Result of one transmission attempt.
///
/// Validation failures never reach this type; they are rejected before any
/// I/O happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    /// Non-2xx response or transport error, with a human-readable detail
    TransportFailure(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Sends a well-formed draft to the intake service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Issue exactly one transmission for the draft. Never retries.
    async fn submit(&self, draft: &RegistrationDraft) -> SubmissionOutcome;
}
