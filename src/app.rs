//! Application state and core logic

use crate::config::WaitlistConfig;
use crate::intake::{IntakeClient, SubmissionGateway, SubmissionOutcome};
use crate::state::{
    AppState, CompletionEffect, DialogState, MountPoint, SubmissionTicket, SubmitAttempt,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// Shown in the status bar when delivery failures are reported
const DELIVERY_FAILED_NOTICE: &str =
    "We could not confirm your registration reached us. Please try again later.";

/// A transmission finished on a background task
#[derive(Debug)]
pub struct SubmissionCompletion {
    pub mount: MountPoint,
    pub ticket_id: Uuid,
    pub outcome: SubmissionOutcome,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Intake service used for every mount point
    gateway: Arc<dyn SubmissionGateway>,
    completions_tx: UnboundedSender<SubmissionCompletion>,
    completions_rx: UnboundedReceiver<SubmissionCompletion>,
    /// Surface delivery failures in the status bar
    report_delivery_failures: bool,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured intake service
    pub fn new(config: &WaitlistConfig) -> Result<Self> {
        let client = IntakeClient::from_config(config)?;
        tracing::info!(endpoint = client.endpoint(), "Using intake service");
        Ok(Self::with_gateway(
            Arc::new(client),
            config.reports_delivery_failures(),
        ))
    }

    pub fn with_gateway(
        gateway: Arc<dyn SubmissionGateway>,
        report_delivery_failures: bool,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            gateway,
            completions_tx,
            completions_rx,
            report_delivery_failures,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.active_mount() {
            Some(mount) => match self.state.mount(mount).dialog_state() {
                DialogState::FormOpen => self.handle_form_key(mount, key),
                DialogState::ThankYouOpen => self.handle_thank_you_key(mount, key),
                DialogState::Closed => {}
            },
            None => self.handle_landing_key(key),
        }
    }

    /// Keys on the landing page: pick an entry point and open its form
    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.state.select_prev_mount();
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                self.state.select_next_mount();
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                self.state.selected_mount = MountPoint::ALL[index];
                self.open_form(self.state.selected_mount);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.open_form(self.state.selected_mount),
            KeyCode::Esc => self.state.clear_status(),
            _ => {}
        }
    }

    fn open_form(&mut self, mount: MountPoint) {
        if self.state.mount_mut(mount).open_form() {
            self.state.clear_status();
            tracing::debug!(mount = mount.label(), "Waitlist form opened");
        }
    }

    /// Keys while a waitlist form is open
    fn handle_form_key(&mut self, mount: MountPoint, key: KeyEvent) {
        let on_submit_button = self.state.mount(mount).focus().is_submit_button();
        let form = self.state.mount_mut(mount);

        match key.code {
            KeyCode::Esc => {
                let had_input = !form.draft().is_blank();
                form.dismiss();
                tracing::debug!(mount = mount.label(), had_input, "Waitlist form dismissed");
            }
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.focus().field() {
                    form.set_field(field, String::new());
                }
            }
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit(mount);
            }
            KeyCode::Enter if on_submit_button => self.submit(mount),
            KeyCode::Enter => {
                // Enter in the question field adds a newline, elsewhere it submits
                let in_multiline = form
                    .focus()
                    .field()
                    .is_some_and(|field| field.is_multiline());
                if in_multiline {
                    form.input_char('\n');
                } else {
                    self.submit(mount);
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c);
            }
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    /// Keys while the thank-you dialog is shown
    fn handle_thank_you_key(&mut self, mount: MountPoint, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q')
        ) {
            self.state.mount_mut(mount).dismiss();
        }
    }

    /// Validate the mount's draft and transmit it on a background task
    fn submit(&mut self, mount: MountPoint) {
        match self.state.mount_mut(mount).submit() {
            SubmitAttempt::Dispatched(ticket) => self.dispatch(mount, ticket),
            SubmitAttempt::AlreadySubmitting => {
                tracing::debug!(mount = mount.label(), "Submit ignored, already in flight");
            }
            // Rejections are rendered inline from the mount state
            SubmitAttempt::Rejected(_) | SubmitAttempt::NotOpen => {}
        }
    }

    fn dispatch(&self, mount: MountPoint, ticket: SubmissionTicket) {
        tracing::info!(
            mount = mount.label(),
            ticket = %ticket.id,
            "Submitting waitlist registration"
        );

        let gateway = Arc::clone(&self.gateway);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let outcome = gateway.submit(&ticket.draft).await;
            let completion = SubmissionCompletion {
                mount,
                ticket_id: ticket.id,
                outcome,
            };
            if tx.send(completion).is_err() {
                tracing::debug!("Completion dropped, application is shutting down");
            }
        });
    }

    /// Apply every finished transmission. Returns how many were applied.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply_completion(completion);
            applied += 1;
        }
        applied
    }

    fn apply_completion(&mut self, completion: SubmissionCompletion) {
        let SubmissionCompletion {
            mount,
            ticket_id,
            outcome,
        } = completion;

        let effect = self.state.mount_mut(mount).complete(ticket_id, outcome);
        match effect {
            CompletionEffect::ShowThankYou(outcome) => {
                if let SubmissionOutcome::TransportFailure(detail) = &outcome {
                    tracing::warn!(
                        mount = mount.label(),
                        ticket = %ticket_id,
                        %detail,
                        "Registration may not have been delivered"
                    );
                    if self.report_delivery_failures {
                        self.state.set_status(DELIVERY_FAILED_NOTICE);
                    }
                }
            }
            CompletionEffect::Discarded(outcome) => {
                tracing::info!(
                    mount = mount.label(),
                    ticket = %ticket_id,
                    delivered = outcome.is_success(),
                    "Submission finished after its form was closed"
                );
            }
            CompletionEffect::Stale => {
                tracing::debug!(
                    mount = mount.label(),
                    ticket = %ticket_id,
                    "Ignoring stale completion"
                );
            }
        }
    }
}
