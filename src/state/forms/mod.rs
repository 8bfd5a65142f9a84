//! Form domain layer
//!
//! Type-safe handling of the waitlist registration form: field values,
//! the draft record and keyboard focus.

mod draft;
mod field;
mod focus;

pub use draft::RegistrationDraft;
pub use field::{FieldName, FormField};
pub use focus::FormFocus;
