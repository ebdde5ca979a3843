//! Registration form rendering

mod field_renderer;
mod registration_form;

pub use registration_form::{draw_registration, FIELDS_TOP, FIELD_COUNT, FIELD_HEIGHT};
