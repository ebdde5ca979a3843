//! Form domain layer
//!
//! Pure form state and validation, independent of the rendering engine.

mod field;
mod registration;

pub use field::FormField;
pub use registration::{
    FieldId, Registration, RegistrationForm, ValidationError, SUBMIT_BUTTON_INDEX,
};
