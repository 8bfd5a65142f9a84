//! The in-progress registration record

use super::field::{FieldName, FormField};

/// A registration that has not been transmitted yet.
///
/// Owned by exactly one form controller. Values are stored verbatim; no
/// trimming or normalisation happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: FormField,
    pub date_of_birth: FormField,
    pub place_of_birth: FormField,
    pub email: FormField,
    pub question: FormField,
}

impl RegistrationDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldName::Name),
            date_of_birth: FormField::new(FieldName::DateOfBirth),
            place_of_birth: FormField::new(FieldName::PlaceOfBirth),
            email: FormField::new(FieldName::Email),
            question: FormField::new(FieldName::Question),
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::DateOfBirth => &self.date_of_birth,
            FieldName::PlaceOfBirth => &self.place_of_birth,
            FieldName::Email => &self.email,
            FieldName::Question => &self.question,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::DateOfBirth => &mut self.date_of_birth,
            FieldName::PlaceOfBirth => &mut self.place_of_birth,
            FieldName::Email => &mut self.email,
            FieldName::Question => &mut self.question,
        }
    }

    /// Shorthand for the text value of a field
    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).as_text()
    }

    pub fn set(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).set_text(value.into());
    }

    /// True when every field, including the optional question, is empty
    pub fn is_blank(&self) -> bool {
        FieldName::ALL.iter().all(|f| self.field(*f).is_empty())
    }
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_blank() {
        let draft = RegistrationDraft::new();
        assert!(draft.is_blank());
        for field in FieldName::ALL {
            assert_eq!(draft.field(field).name, field);
        }
    }

    #[test]
    fn test_set_and_read_back() {
        let mut draft = RegistrationDraft::default();
        draft.set(FieldName::PlaceOfBirth, "Mumbai");
        assert_eq!(draft.value(FieldName::PlaceOfBirth), "Mumbai");
        assert_eq!(draft.place_of_birth.as_text(), "Mumbai");
        assert!(!draft.is_blank());
    }

    #[test]
    fn test_question_alone_makes_draft_non_blank() {
        let mut draft = RegistrationDraft::new();
        draft.set(FieldName::Question, "When do you launch?");
        assert!(!draft.is_blank());
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let mut draft = RegistrationDraft::new();
        draft.set(FieldName::Name, "  Asha ");
        assert_eq!(draft.value(FieldName::Name), "  Asha ");
    }
}
