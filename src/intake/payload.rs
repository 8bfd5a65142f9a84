//! Wire payload for the intake service

use crate::state::{FieldName, RegistrationDraft};
use serde::Serialize;

/// Subject line attached to every registration
pub const SUBJECT: &str = "New Niyati Waitlist Registration";

/// Substituted into the message body when no question was asked
const NO_QUESTION: &str = "Not provided";

/// JSON body posted to the intake endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakePayload {
    pub name: String,
    pub email: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    /// Sent as typed, possibly empty
    pub question: String,
    pub subject: &'static str,
    pub message: String,
}

impl IntakePayload {
    pub fn from_draft(draft: &RegistrationDraft) -> Self {
        Self {
            name: draft.value(FieldName::Name).to_string(),
            email: draft.value(FieldName::Email).to_string(),
            date_of_birth: draft.value(FieldName::DateOfBirth).to_string(),
            place_of_birth: draft.value(FieldName::PlaceOfBirth).to_string(),
            question: draft.value(FieldName::Question).to_string(),
            subject: SUBJECT,
            message: render_message(draft),
        }
    }
}

/// Human-readable summary embedding every field
fn render_message(draft: &RegistrationDraft) -> String {
    let question = match draft.value(FieldName::Question) {
        "" => NO_QUESTION,
        q => q,
    };

    format!(
        "New Waitlist Registration:\n\
         \n\
         Name: {}\n\
         Date of Birth: {}\n\
         Place of Birth: {}\n\
         Email: {}\n\
         \n\
         Question: {}\n",
        draft.value(FieldName::Name),
        draft.value(FieldName::DateOfBirth),
        draft.value(FieldName::PlaceOfBirth),
        draft.value(FieldName::Email),
        question,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn draft_with_question(question: &str) -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.set(FieldName::Name, "Asha");
        draft.set(FieldName::DateOfBirth, "15-08-1990");
        draft.set(FieldName::PlaceOfBirth, "Mumbai");
        draft.set(FieldName::Email, "asha@example.com");
        draft.set(FieldName::Question, question);
        draft
    }

    #[test]
    fn test_json_shape() {
        let payload = IntakePayload::from_draft(&draft_with_question(""));
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "Asha",
                "email": "asha@example.com",
                "dateOfBirth": "15-08-1990",
                "placeOfBirth": "Mumbai",
                "question": "",
                "subject": "New Niyati Waitlist Registration",
                "message": "New Waitlist Registration:\n\nName: Asha\nDate of Birth: 15-08-1990\nPlace of Birth: Mumbai\nEmail: asha@example.com\n\nQuestion: Not provided\n",
            })
        );
    }

    #[test]
    fn test_empty_question_substituted_only_in_message() {
        let payload = IntakePayload::from_draft(&draft_with_question(""));
        assert_eq!(payload.question, "");
        assert!(payload.message.contains("Question: Not provided"));
    }

    #[test]
    fn test_question_embedded_verbatim() {
        let payload = IntakePayload::from_draft(&draft_with_question("Will I travel?"));
        assert_eq!(payload.question, "Will I travel?");
        assert!(payload.message.ends_with("Question: Will I travel?\n"));
        assert!(!payload.message.contains("Not provided"));
    }

    #[test]
    fn test_whitespace_question_is_not_substituted() {
        let payload = IntakePayload::from_draft(&draft_with_question(" "));
        assert!(payload.message.contains("Question:  \n"));
    }
}
