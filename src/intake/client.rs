//! HTTP client for the waitlist intake service
//!
//! Posts one JSON document per registration. A 2xx status is a success;
//! anything else, including transport errors and timeouts, becomes
//! [`SubmissionOutcome::TransportFailure`]. There is no retry.

use super::payload::IntakePayload;
use super::traits::{SubmissionGateway, SubmissionOutcome};
use crate::config::WaitlistConfig;
use crate::state::RegistrationDraft;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Longest response body kept in a failure detail
const MAX_BODY_DETAIL: usize = 200;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to intake service failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("intake service responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Client for posting registrations to the intake endpoint
pub struct IntakeClient {
    http: Client,
    endpoint: String,
}

impl IntakeClient {
    /// Create a client for `endpoint`. `None` disables the request timeout.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, IntakeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(IntakeError::Client)?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &WaitlistConfig) -> Result<Self, IntakeError> {
        Self::new(config.intake_url(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the payload once
    pub async fn post(&self, payload: &IntakePayload) -> Result<(), IntakeError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(IntakeError::Status {
            status,
            body: truncate_body(&body),
        })
    }
}

#[async_trait]
impl SubmissionGateway for IntakeClient {
    async fn submit(&self, draft: &RegistrationDraft) -> SubmissionOutcome {
        let payload = IntakePayload::from_draft(draft);
        match self.post(&payload).await {
            Ok(()) => {
                tracing::info!(endpoint = %self.endpoint, "Registration delivered");
                SubmissionOutcome::Success
            }
            Err(err) => {
                tracing::warn!(
                    endpoint = %self.endpoint,
                    error = %err,
                    "Registration delivery failed"
                );
                SubmissionOutcome::TransportFailure(err.to_string())
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_BODY_DETAIL) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
