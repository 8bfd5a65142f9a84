//! Registration validation rules
//!
//! Checks run in a fixed order and stop at the first failure, so a verdict
//! carries at most one reason:
//! 1. required fields are non-empty (no trimming: `"   "` counts as filled)
//! 2. email has a `local@domain.tld` shape
//! 3. date of birth has a `DD-MM-YYYY` shape (no calendar check)

use super::forms::{FieldName, RegistrationDraft};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// `\s` here is Unicode White_Space, which does not cover U+FEFF
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$")
        .expect("compile email regex")
});

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("compile date regex"));

/// Reason a draft was rejected before transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// First required field found empty
    #[error("Please fill in all required fields")]
    MissingRequiredField(FieldName),
    #[error("Please enter a valid email address")]
    MalformedEmail,
    #[error("Please enter date of birth in dd-mm-yyyy format")]
    MalformedDate,
}

impl ValidationError {
    /// The field the error should be rendered next to
    pub fn field(&self) -> FieldName {
        match self {
            Self::MissingRequiredField(field) => *field,
            Self::MalformedEmail => FieldName::Email,
            Self::MalformedDate => FieldName::DateOfBirth,
        }
    }
}

/// Outcome of validating a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationVerdict {
    Valid,
    Invalid(ValidationError),
}

impl ValidationVerdict {
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(err) => Err(err),
        }
    }
}

/// Validate a draft. Pure: no I/O, no mutation.
pub fn validate(draft: &RegistrationDraft) -> ValidationVerdict {
    match check(draft) {
        Ok(()) => ValidationVerdict::Valid,
        Err(err) => ValidationVerdict::Invalid(err),
    }
}

fn check(draft: &RegistrationDraft) -> Result<(), ValidationError> {
    if let Some(missing) = FieldName::REQUIRED
        .into_iter()
        .find(|f| draft.field(*f).is_empty())
    {
        return Err(ValidationError::MissingRequiredField(missing));
    }

    if !is_email_shaped(draft.email.as_text()) {
        return Err(ValidationError::MalformedEmail);
    }

    if !is_date_shaped(draft.date_of_birth.as_text()) {
        return Err(ValidationError::MalformedDate);
    }

    Ok(())
}

/// `local@domain.tld` with no whitespace and a single `@`
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Two digits, hyphen, two digits, hyphen, four digits
pub fn is_date_shaped(value: &str) -> bool {
    DATE_PATTERN.is_match(value)
}
