//! Keyboard focus within the waitlist form

use super::field::FieldName;

/// Which element of the form receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldName),
    SubmitButton,
}

impl Default for FormFocus {
    fn default() -> Self {
        Self::Field(FieldName::Name)
    }
}

impl FormFocus {
    /// Number of focusable stops: five fields plus the submit button
    const STOPS: usize = FieldName::ALL.len() + 1;

    fn position(&self) -> usize {
        match self {
            Self::Field(name) => name.index(),
            Self::SubmitButton => FieldName::ALL.len(),
        }
    }

    fn from_position(position: usize) -> Self {
        FieldName::ALL
            .get(position)
            .map_or(Self::SubmitButton, |name| Self::Field(*name))
    }

    /// The focused field, or `None` when the submit button is focused
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::Field(name) => Some(*name),
            Self::SubmitButton => None,
        }
    }

    pub fn is_submit_button(&self) -> bool {
        matches!(self, Self::SubmitButton)
    }

    pub fn next(&self) -> Self {
        Self::from_position((self.position() + 1) % Self::STOPS)
    }

    pub fn prev(&self) -> Self {
        let current = self.position();
        if current == 0 {
            Self::from_position(Self::STOPS - 1)
        } else {
            Self::from_position(current - 1)
        }
    }
}
