//! Intake service module for transmitting registrations over HTTP

mod client;
mod payload;
mod traits;

pub use client::IntakeClient;
pub use traits::{SubmissionGateway, SubmissionOutcome};

#[cfg(test)]
pub use traits::MockSubmissionGateway;
