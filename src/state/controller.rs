//! Form state controller
//!
//! Owns the draft and the submission status for one mount point. Submission
//! is split in two halves so the event loop never blocks on the network:
//! [`FormStateController::begin_submit`] validates and hands out a ticket,
//! [`FormStateController::complete_submit`] applies the outcome once the
//! transmission finishes.

use super::forms::{FieldName, RegistrationDraft};
use super::validation::{validate, ValidationError};
use crate::intake::SubmissionOutcome;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Lifecycle of the most recent submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    /// Transmission finished; set for delivery failures too
    Succeeded,
    /// Rejected by validation, nothing was sent
    Failed,
}

/// A validated draft on its way to the intake service
#[derive(Debug, Clone)]
pub struct SubmissionTicket {
    pub id: Uuid,
    pub draft: RegistrationDraft,
}

/// Result of asking to submit
#[derive(Debug, Clone)]
pub enum SubmitAttempt {
    /// Validation failed; nothing was sent
    Rejected(ValidationError),
    /// A transmission is already in flight; ignored
    AlreadySubmitting,
    /// No form is open to submit from
    NotOpen,
    /// Validated and ready to transmit
    Dispatched(SubmissionTicket),
}

/// Diagnostic record of the last finished transmission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRecord {
    pub outcome: SubmissionOutcome,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct FormStateController {
    draft: RegistrationDraft,
    status: SubmissionStatus,
    in_flight: Option<Uuid>,
    last_rejection: Option<ValidationError>,
    last_delivery: Option<DeliveryRecord>,
}

impl FormStateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<Uuid> {
        self.in_flight
    }

    /// Verdict of the last rejected attempt, cleared by any edit
    pub fn last_rejection(&self) -> Option<ValidationError> {
        self.last_rejection
    }

    pub fn last_delivery(&self) -> Option<&DeliveryRecord> {
        self.last_delivery.as_ref()
    }

    /// Replace a field value. Never validates; allowed while submitting.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.draft.set(field, value);
        self.last_rejection = None;
    }

    pub fn push_char(&mut self, field: FieldName, c: char) {
        self.draft.field_mut(field).push_char(c);
        self.last_rejection = None;
    }

    pub fn pop_char(&mut self, field: FieldName) {
        self.draft.field_mut(field).pop_char();
        self.last_rejection = None;
    }

    /// Start a new, empty draft. An in-flight transmission is left running.
    pub fn reset(&mut self) {
        self.draft = RegistrationDraft::new();
        self.last_rejection = None;
        if self.in_flight.is_none() {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Validate the draft and, if it passes, mark it as in flight
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.in_flight.is_some() {
            return SubmitAttempt::AlreadySubmitting;
        }

        if let Err(err) = validate(&self.draft).into_result() {
            tracing::debug!(reason = ?err, "Registration rejected by validation");
            self.status = SubmissionStatus::Failed;
            self.last_rejection = Some(err);
            return SubmitAttempt::Rejected(err);
        }

        let id = Uuid::new_v4();
        self.in_flight = Some(id);
        self.status = SubmissionStatus::Submitting;
        self.last_rejection = None;

        SubmitAttempt::Dispatched(SubmissionTicket {
            id,
            draft: self.draft.clone(),
        })
    }

    /// Apply the outcome of ticket `id`.
    ///
    /// Both outcomes count as finished from the user's point of view. When
    /// `reset_draft` is false the current draft belongs to a newer form
    /// session and is kept. Returns false for an unknown ticket.
    pub fn complete_submit(
        &mut self,
        id: Uuid,
        outcome: SubmissionOutcome,
        reset_draft: bool,
    ) -> bool {
        if self.in_flight != Some(id) {
            return false;
        }

        self.in_flight = None;
        self.status = SubmissionStatus::Succeeded;
        self.last_delivery = Some(DeliveryRecord {
            outcome,
            completed_at: Utc::now(),
        });
        if reset_draft {
            self.draft = RegistrationDraft::new();
        }
        true
    }
}
