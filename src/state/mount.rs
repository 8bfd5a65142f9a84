//! Mount points: one independent waitlist workflow per entry point

use super::controller::{FormStateController, SubmissionStatus, SubmitAttempt};
use super::dialog::{DialogCoordinator, DialogState};
use super::forms::{FieldName, FormFocus, RegistrationDraft};
use super::validation::ValidationError;
use crate::intake::SubmissionOutcome;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Locations on the landing page that offer "Join Waitlist"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    Header,
    Hero,
    Services,
}

impl MountPoint {
    pub const ALL: [MountPoint; 3] = [
        MountPoint::Header,
        MountPoint::Hero,
        MountPoint::Services,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Header => "Header",
            Self::Hero => "Hero",
            Self::Services => "Services",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Header => 0,
            Self::Hero => 1,
            Self::Services => 2,
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What applying a transmission outcome did to the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionEffect {
    /// The form that submitted is still open and now shows the thank-you view
    ShowThankYou(SubmissionOutcome),
    /// The form was dismissed or reopened since dispatch; the UI is untouched
    Discarded(SubmissionOutcome),
    /// No transmission with that id is in flight
    Stale,
}

/// A controller and dialog coordinator pair bound to one mount point
#[derive(Debug)]
pub struct WaitlistMount {
    mount: MountPoint,
    controller: FormStateController,
    dialog: DialogCoordinator,
    focus: FormFocus,
    /// Form session that dispatched the in-flight transmission
    dispatched_session: Option<u64>,
}

impl WaitlistMount {
    pub fn new(mount: MountPoint) -> Self {
        Self {
            mount,
            controller: FormStateController::new(),
            dialog: DialogCoordinator::new(),
            focus: FormFocus::default(),
            dispatched_session: None,
        }
    }

    pub fn mount(&self) -> MountPoint {
        self.mount
    }

    pub fn dialog_state(&self) -> DialogState {
        self.dialog.state()
    }

    pub fn is_closed(&self) -> bool {
        self.dialog.is_closed()
    }

    pub fn is_form_open(&self) -> bool {
        self.dialog.state() == DialogState::FormOpen
    }

    pub fn draft(&self) -> &RegistrationDraft {
        self.controller.draft()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.controller.status()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.is_submitting()
    }

    /// Inline error to render with the form
    pub fn rejection(&self) -> Option<ValidationError> {
        self.controller.last_rejection()
    }

    /// When the intake service accepted the last registration. `None` if it
    /// was never confirmed, including masked delivery failures.
    pub fn delivered_at(&self) -> Option<DateTime<Utc>> {
        self.controller
            .last_delivery()
            .filter(|delivery| delivery.outcome.is_success())
            .map(|delivery| delivery.completed_at)
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Open the form with a fresh draft
    pub fn open_form(&mut self) -> bool {
        if !self.dialog.open_form() {
            return false;
        }
        self.controller.reset();
        self.focus = FormFocus::default();
        true
    }

    /// Returns false when no form is open to receive the edit
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) -> bool {
        if !self.is_form_open() {
            return false;
        }
        self.controller.set_field(field, value);
        true
    }

    /// Type into the focused field
    pub fn input_char(&mut self, c: char) {
        if let (true, Some(field)) = (self.is_form_open(), self.focus.field()) {
            self.controller.push_char(field, c);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        if let (true, Some(field)) = (self.is_form_open(), self.focus.field()) {
            self.controller.pop_char(field);
        }
    }

    /// Validate and, on success, hand back a ticket to transmit
    pub fn submit(&mut self) -> SubmitAttempt {
        if !self.is_form_open() {
            return SubmitAttempt::NotOpen;
        }

        let attempt = self.controller.begin_submit();
        match &attempt {
            SubmitAttempt::Dispatched(_) => {
                self.dispatched_session = Some(self.dialog.session());
            }
            SubmitAttempt::Rejected(err) => {
                self.focus = FormFocus::Field(err.field());
            }
            SubmitAttempt::AlreadySubmitting | SubmitAttempt::NotOpen => {}
        }
        attempt
    }

    /// Apply the outcome of a finished transmission
    pub fn complete(&mut self, ticket_id: Uuid, outcome: SubmissionOutcome) -> CompletionEffect {
        if self.controller.in_flight() != Some(ticket_id) {
            return CompletionEffect::Stale;
        }

        let same_session = self.dispatched_session.take() == Some(self.dialog.session())
            && self.is_form_open();

        self.controller
            .complete_submit(ticket_id, outcome.clone(), same_session);

        if same_session {
            self.dialog.show_thank_you();
            self.focus = FormFocus::default();
            CompletionEffect::ShowThankYou(outcome)
        } else {
            CompletionEffect::Discarded(outcome)
        }
    }

    /// Close the open dialog. Closing the form discards its draft.
    pub fn dismiss(&mut self) -> bool {
        match self.dialog.dismiss() {
            Some(DialogState::FormOpen) => {
                self.controller.reset();
                true
            }
            Some(_) => true,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(mount: &mut WaitlistMount, email: &str) {
        mount.set_field(FieldName::Name, "Asha");
        mount.set_field(FieldName::DateOfBirth, "15-08-1990");
        mount.set_field(FieldName::PlaceOfBirth, "Mumbai");
        mount.set_field(FieldName::Email, email);
        mount.set_field(FieldName::Question, "");
    }

    fn dispatched(mount: &mut WaitlistMount) -> Uuid {
        match mount.submit() {
            SubmitAttempt::Dispatched(ticket) => ticket.id,
            other => panic!("expected dispatch, got {other:?}"),
        }
    }

    mod mount_point {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_and_prev_wrap() {
            assert_eq!(MountPoint::Services.next(), MountPoint::Header);
            assert_eq!(MountPoint::Header.prev(), MountPoint::Services);
            assert_eq!(MountPoint::Hero.next(), MountPoint::Services);
        }

        #[test]
        fn test_index_matches_all() {
            for (i, mount) in MountPoint::ALL.iter().enumerate() {
                assert_eq!(mount.index(), i);
            }
        }
    }

    mod scenarios {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_happy_path() {
            let mut mount = WaitlistMount::new(MountPoint::Hero);
            assert!(mount.open_form());
            fill(&mut mount, "asha@example.com");

            let ticket = match mount.submit() {
                SubmitAttempt::Dispatched(ticket) => ticket,
                other => panic!("expected dispatch, got {other:?}"),
            };
            assert_eq!(ticket.draft.value(FieldName::Email), "asha@example.com");
            assert_eq!(mount.status(), SubmissionStatus::Submitting);

            let effect = mount.complete(ticket.id, SubmissionOutcome::Success);
            assert_eq!(effect, CompletionEffect::ShowThankYou(SubmissionOutcome::Success));
            assert_eq!(mount.dialog_state(), DialogState::ThankYouOpen);
            assert_eq!(mount.status(), SubmissionStatus::Succeeded);
            assert!(mount.draft().is_blank());
            assert!(mount.delivered_at().is_some());
        }

        #[test]
        fn test_missing_field_keeps_form_open() {
            let mut mount = WaitlistMount::new(MountPoint::Header);
            mount.open_form();
            fill(&mut mount, "");

            assert!(matches!(
                mount.submit(),
                SubmitAttempt::Rejected(ValidationError::MissingRequiredField(FieldName::Email))
            ));
            assert_eq!(mount.dialog_state(), DialogState::FormOpen);
            assert!(!mount.is_submitting());
            assert_eq!(mount.focus(), FormFocus::Field(FieldName::Email));
        }

        #[test]
        fn test_malformed_email_is_not_sent() {
            let mut mount = WaitlistMount::new(MountPoint::Services);
            mount.open_form();
            fill(&mut mount, "not-an-email");

            assert!(matches!(
                mount.submit(),
                SubmitAttempt::Rejected(ValidationError::MalformedEmail)
            ));
            assert_eq!(mount.rejection(), Some(ValidationError::MalformedEmail));
            assert_eq!(mount.dialog_state(), DialogState::FormOpen);
        }

        #[test]
        fn test_transport_failure_still_shows_thank_you() {
            let mut mount = WaitlistMount::new(MountPoint::Hero);
            mount.open_form();
            fill(&mut mount, "asha@example.com");
            let id = dispatched(&mut mount);

            let failure = SubmissionOutcome::TransportFailure("503".to_string());
            let effect = mount.complete(id, failure.clone());

            assert_eq!(effect, CompletionEffect::ShowThankYou(failure));
            assert_eq!(mount.dialog_state(), DialogState::ThankYouOpen);
            assert!(mount.draft().is_blank());
            assert!(mount.delivered_at().is_none());
        }
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_opened_draft_is_empty_after_either_outcome() {
            for outcome in [
                SubmissionOutcome::Success,
                SubmissionOutcome::TransportFailure("timeout".to_string()),
            ] {
                let mut mount = WaitlistMount::new(MountPoint::Hero);
                mount.open_form();
                fill(&mut mount, "asha@example.com");
                let id = dispatched(&mut mount);
                mount.complete(id, outcome);
                assert!(mount.dismiss());

                assert!(mount.open_form());
                for field in FieldName::ALL {
                    assert_eq!(mount.draft().value(field), "", "{field:?}");
                }
            }
        }

        #[test]
        fn test_dismissing_form_discards_draft() {
            let mut mount = WaitlistMount::new(MountPoint::Header);
            mount.open_form();
            fill(&mut mount, "asha@example.com");

            assert!(mount.dismiss());
            assert_eq!(mount.dialog_state(), DialogState::Closed);
            assert!(mount.draft().is_blank());
        }

        #[test]
        fn test_edits_ignored_while_closed() {
            let mut mount = WaitlistMount::new(MountPoint::Header);
            assert!(!mount.set_field(FieldName::Name, "Asha"));
            mount.input_char('x');
            assert!(mount.draft().is_blank());
        }

        #[test]
        fn test_submit_while_closed_is_not_open() {
            let mut mount = WaitlistMount::new(MountPoint::Header);
            assert!(matches!(mount.submit(), SubmitAttempt::NotOpen));
        }

        #[test]
        fn test_typing_goes_to_focused_field() {
            let mut mount = WaitlistMount::new(MountPoint::Hero);
            mount.open_form();
            mount.input_char('A');
            mount.focus_next();
            mount.input_char('1');
            mount.input_char('2');
            mount.backspace();

            assert_eq!(mount.draft().value(FieldName::Name), "A");
            assert_eq!(mount.draft().value(FieldName::DateOfBirth), "1");
        }

        #[test]
        fn test_typing_on_submit_button_is_ignored() {
            let mut mount = WaitlistMount::new(MountPoint::Hero);
            mount.open_form();
            mount.focus_prev();
            assert!(mount.focus().is_submit_button());
            mount.input_char('x');
            assert!(mount.draft().is_blank());
        }
    }

    mod single_flight {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_second_submit_is_ignored() {
            let mut mount = WaitlistMount::new(MountPoint::Hero);
            mount.open_form();
            fill(&mut mount, "asha@example.com");
            let _id = dispatched(&mut mount);

            assert!(matches!(mount.submit(), SubmitAttempt::AlreadySubmitting));
        }

        #[test]
        fn test_single_flight_survives_reopen() {
            let mut mount = WaitlistMount::new(MountPoint::Hero);
            mount.open_form();
            fill(&mut mount, "asha@example.com");
            let id = dispatched(&mut mount);

            mount.dismiss();
            mount.open_form();
            fill(&mut mount, "ravi@example.com");
            assert!(matches!(mount.submit(), SubmitAttempt::AlreadySubmitting));

            // The old outcome must not touch the new session's draft
            let effect = mount.complete(id, SubmissionOutcome::Success);
            assert_eq!(effect, CompletionEffect::Discarded(SubmissionOutcome::Success));
            assert_eq!(mount.dialog_state(), DialogState::FormOpen);
            assert_eq!(mount.draft().value(FieldName::Email), "ravi@example.com");

            assert!(matches!(mount.submit(), SubmitAttempt::Dispatched(_)));
        }

        #[test]
        fn test_outcome_after_dismiss_is_discarded() {
            let mut mount = WaitlistMount::new(MountPoint::Services);
            mount.open_form();
            fill(&mut mount, "asha@example.com");
            let id = dispatched(&mut mount);

            mount.dismiss();
            let effect = mount.complete(id, SubmissionOutcome::Success);

            assert_eq!(effect, CompletionEffect::Discarded(SubmissionOutcome::Success));
            assert_eq!(mount.dialog_state(), DialogState::Closed);
            assert!(!mount.is_submitting());
        }

        #[test]
        fn test_unknown_ticket_is_stale() {
            let mut mount = WaitlistMount::new(MountPoint::Hero);
            mount.open_form();
            fill(&mut mount, "asha@example.com");
            let _id = dispatched(&mut mount);

            assert_eq!(
                mount.complete(Uuid::new_v4(), SubmissionOutcome::Success),
                CompletionEffect::Stale
            );
            assert!(mount.is_submitting());
        }
    }

    #[test]
    fn test_mounts_are_independent() {
        let mut header = WaitlistMount::new(MountPoint::Header);
        let mut hero = WaitlistMount::new(MountPoint::Hero);
        header.open_form();
        hero.open_form();
        header.set_field(FieldName::Name, "Asha");

        assert_eq!(hero.draft().value(FieldName::Name), "");
        header.dismiss();
        assert_eq!(hero.dialog_state(), DialogState::FormOpen);
    }
}
