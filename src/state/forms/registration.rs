//! Registration form state and validation

use super::field::FormField;
use crate::state::{Notification, NotificationSink};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies one of the four registration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Name,
    Email,
    Age,
    Document,
}

impl FieldId {
    /// All fields in display order
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Age,
        FieldId::Document,
    ];

    /// Field at the given form index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Validation failure raised at submission time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more fields is empty
    #[error("Por favor, preencha todos os campos.")]
    MissingField,
    /// The age field does not parse as an integer
    #[error("A idade deve ser um número válido.")]
    InvalidAge,
}

/// Immutable snapshot produced by a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub document: String,
}

/// Index of the submit button row (after the four fields)
pub const SUBMIT_BUTTON_INDEX: usize = 4;

/// Number of navigable positions (four fields + submit button row)
const POSITION_COUNT: usize = 5;

/// Registration form with four text buffers and field navigation
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: FormField,
    pub email: FormField,
    pub age: FormField,
    pub document: FormField,
    pub active_field_index: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Nome", "Digite seu nome completo"),
            email: FormField::text("email", "E-mail", "exemplo@dominio.com"),
            age: FormField::text("age", "Idade", "Sua idade"),
            document: FormField::text("document", "Documento", "Número do documento (ex: CPF)"),
            active_field_index: 0,
        }
    }

    /// Borrow the addressed field
    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Age => &self.age,
            FieldId::Document => &self.document,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Age => &mut self.age,
            FieldId::Document => &mut self.document,
        }
    }

    /// Replace the addressed field's buffer with the given text, unvalidated
    pub fn set_field(&mut self, id: FieldId, value: String) {
        self.field_mut(id).set_text(value);
    }

    /// Returns true if the submit button row is currently active
    pub fn is_button_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// Move to the next position (wraps around, includes the button row)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % POSITION_COUNT;
    }

    /// Move to the previous position (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = POSITION_COUNT - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Focus the given position, clamped to the button row
    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }

    /// The active field, if a field (not the button row) is focused
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        FieldId::from_index(self.active_field_index).map(|id| self.field_mut(id))
    }

    /// Append a character to the active field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field_mut() {
            field.push_char(c);
        }
    }

    /// Remove the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop_char();
        }
    }

    /// Validate the current buffers and build the snapshot.
    ///
    /// Emptiness is checked exactly, with no trimming; the age buffer is
    /// converted to an integer only here.
    pub fn validate(&self) -> Result<Registration, ValidationError> {
        if FieldId::ALL.iter().any(|&id| self.field(id).is_empty()) {
            return Err(ValidationError::MissingField);
        }

        let age = parse_age(self.age.as_text())?;

        Ok(Registration {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            age,
            document: self.document.as_text().to_string(),
        })
    }

    /// Validate and report the outcome through the notification port.
    ///
    /// On success the snapshot is presented to the sink; on failure the error
    /// is presented and every buffer is left untouched.
    pub fn submit_into<S: NotificationSink + ?Sized>(
        &self,
        sink: &mut S,
    ) -> Result<Registration, ValidationError> {
        match self.validate() {
            Ok(snapshot) => {
                sink.notify(Notification::success(&snapshot));
                Ok(snapshot)
            }
            Err(err) => {
                sink.notify(Notification::error(err));
                Err(err)
            }
        }
    }

    /// Reset all four buffers to the empty string and refocus the first field
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.age.clear();
        self.document.clear();
        self.active_field_index = 0;
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the leading base-10 integer of the buffer.
///
/// Leading whitespace and an optional sign are accepted, the leading run of
/// ASCII digits is consumed and trailing text is ignored. Fails only when no
/// digits are usable; magnitudes beyond `i32` saturate at the type bounds.
fn parse_age(raw: &str) -> Result<i32, ValidationError> {
    let input = raw.trim_start();
    let (negative, digits) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let run = digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if run == 0 {
        return Err(ValidationError::InvalidAge);
    }

    let mut magnitude: i64 = 0;
    for b in digits[..run].bytes() {
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }
    let value = if negative { -magnitude } else { magnitude };

    Ok(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}
