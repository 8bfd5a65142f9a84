//! Form field value objects

/// Identifies one field of the waitlist registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    DateOfBirth,
    PlaceOfBirth,
    Email,
    Question,
}

impl FieldName {
    /// All fields in form order
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::DateOfBirth,
        FieldName::PlaceOfBirth,
        FieldName::Email,
        FieldName::Question,
    ];

    /// Fields that must be non-empty, in the order they are checked
    pub const REQUIRED: [FieldName; 4] = [
        FieldName::Name,
        FieldName::DateOfBirth,
        FieldName::PlaceOfBirth,
        FieldName::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::DateOfBirth => "Date of Birth",
            Self::PlaceOfBirth => "Place of Birth",
            Self::Email => "Email ID",
            Self::Question => "Question (Optional)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Enter your full name",
            Self::DateOfBirth => "dd-mm-yyyy",
            Self::PlaceOfBirth => "Enter your place of birth",
            Self::Email => "Enter your email address",
            Self::Question => "Ask us anything...",
        }
    }

    /// Helper line rendered below the field, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Question => Some("Questions that you would want Niyati to answer once it's live"),
            _ => None,
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Question)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Question)
    }

    /// Position in [`FieldName::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::DateOfBirth => 1,
            Self::PlaceOfBirth => 2,
            Self::Email => 3,
            Self::Question => 4,
        }
    }
}

/// Represents a single form field with its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    /// Label with a required marker
    pub fn label(&self) -> String {
        if self.name.is_required() {
            format!("{} *", self.name.label())
        } else {
            self.name.label().to_string()
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn push_char(&mut self, c: char) {
        // Only the question field accepts line breaks
        if c == '\n' && !self.name.is_multiline() {
            return;
        }
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
    }
}
