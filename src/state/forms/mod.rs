//! Form domain layer
//!
//! Type-safe RSVP form handling: field values, focus navigation and the
//! companion-section rules.

mod field;
mod form_state;

pub use field::{ChoiceGroup, FieldValue, FormField};
pub use form_state::{field_names, Form, FormState};
