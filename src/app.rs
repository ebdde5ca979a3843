//! Application logic and event handling

use crate::config::TuiConfig;
use crate::state::{AppState, SUBMIT_BUTTON_INDEX};
use crate::ui::components::BUTTON_HEIGHT;
use crate::ui::forms::{FIELDS_TOP, FIELD_COUNT, FIELD_HEIGHT};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What a mouse click inside the form lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HitTarget {
    Field(usize),
    SubmitButton,
}

/// Main application
pub struct App {
    pub state: AppState,
    pub config: TuiConfig,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        Self {
            state: AppState::new(),
            config,
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle dialog dismissal first (modal)
        if self.state.dialogs.has_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                tracing::debug!("dialog acknowledged");
                self.state.acknowledge();
            }
            return;
        }

        match key.code {
            // Submit shortcut works from anywhere in the form
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit_registration();
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter => {
                if self.state.form.is_button_row_active() {
                    self.submit_registration();
                } else {
                    // Enter in a single-line field advances to the next one
                    self.state.form.next_field();
                }
            }
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Char(c) => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                self.state.form.input_char(ch);
            }
            _ => {}
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Dialogs are keyboard-dismissed only
        if self.state.dialogs.has_open() {
            return;
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            match Self::hit_target(mouse.row) {
                Some(HitTarget::Field(index)) => self.state.form.set_active_field(index),
                Some(HitTarget::SubmitButton) => {
                    self.state.form.set_active_field(SUBMIT_BUTTON_INDEX);
                    self.submit_registration();
                }
                None => {}
            }
        }
    }

    /// Map a click row to the field or button drawn there.
    ///
    /// The form is anchored to the top-left of the screen: one border row,
    /// four field boxes of FIELD_HEIGHT rows each, a spacer row, then the
    /// submit button row (see `ui::forms` for the layout constants).
    fn hit_target(row: u16) -> Option<HitTarget> {
        let fields_end = FIELDS_TOP + FIELD_COUNT * FIELD_HEIGHT;
        if (FIELDS_TOP..fields_end).contains(&row) {
            return Some(HitTarget::Field(((row - FIELDS_TOP) / FIELD_HEIGHT) as usize));
        }

        let button_top = fields_end + 1;
        if (button_top..button_top + BUTTON_HEIGHT).contains(&row) {
            return Some(HitTarget::SubmitButton);
        }

        None
    }

    /// Submit the form and log the outcome
    fn submit_registration(&mut self) {
        match self.state.submit_form() {
            Ok(snapshot) => {
                tracing::info!(name = %snapshot.name, age = snapshot.age, "registration accepted");
            }
            Err(err) => {
                tracing::debug!(%err, "registration rejected");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldId, FormPhase, NotificationKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::SHIFT)
    }

    fn click(row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 2,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn test_app() -> App {
        App::new(TuiConfig::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn fill_form(app: &mut App) {
        app.state.form.set_field(FieldId::Name, "Ana".to_string());
        app.state
            .form
            .set_field(FieldId::Email, "ana@ex.com".to_string());
        app.state.form.set_field(FieldId::Age, "29".to_string());
        app.state
            .form
            .set_field(FieldId::Document, "12345".to_string());
    }

    mod keyboard {
        use super::*;

        #[test]
        fn test_typing_fills_active_field() {
            let mut app = test_app();
            type_text(&mut app, "Ana");
            assert_eq!(app.state.form.field(FieldId::Name).as_text(), "Ana");
        }

        #[test]
        fn test_shift_uppercases_ascii() {
            let mut app = test_app();
            app.handle_key(shift_key(KeyCode::Char('a')));
            assert_eq!(app.state.form.field(FieldId::Name).as_text(), "A");
        }

        #[test]
        fn test_tab_moves_between_fields() {
            let mut app = test_app();
            type_text(&mut app, "Ana");
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "a@b.com");
            assert_eq!(app.state.form.field(FieldId::Name).as_text(), "Ana");
            assert_eq!(app.state.form.field(FieldId::Email).as_text(), "a@b.com");
        }

        #[test]
        fn test_backtab_wraps_to_button_row() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::BackTab));
            assert!(app.state.form.is_button_row_active());
        }

        #[test]
        fn test_arrow_keys_navigate() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Down));
            app.handle_key(key(KeyCode::Down));
            assert_eq!(app.state.form.active_field_index, 2);
            app.handle_key(key(KeyCode::Up));
            assert_eq!(app.state.form.active_field_index, 1);
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut app = test_app();
            type_text(&mut app, "Ana");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.form.field(FieldId::Name).as_text(), "An");
        }

        #[test]
        fn test_enter_in_field_advances() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.form.active_field_index, 1);
        }

        #[test]
        fn test_enter_on_button_row_submits() {
            let mut app = test_app();
            fill_form(&mut app);
            app.state.form.set_active_field(SUBMIT_BUTTON_INDEX);
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.phase, FormPhase::Submitted);
            assert_eq!(
                app.state.dialogs.current().unwrap().kind,
                NotificationKind::Success
            );
        }

        #[test]
        fn test_submit_shortcut_works_from_any_field() {
            let mut app = test_app();
            fill_form(&mut app);
            app.handle_key(KeyEvent::new(
                KeyCode::Char('s'),
                crate::platform::SUBMIT_MODIFIER,
            ));
            assert_eq!(app.state.phase, FormPhase::Submitted);
            // The shortcut character must not leak into the active field
            assert_eq!(app.state.form.field(FieldId::Name).as_text(), "Ana");
        }

        #[test]
        fn test_submit_with_empty_fields_opens_error_dialog() {
            let mut app = test_app();
            app.state.form.set_active_field(SUBMIT_BUTTON_INDEX);
            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.state.phase, FormPhase::Editing);
            assert_eq!(app.state.dialogs.current().unwrap().title, "Erro");
        }
    }

    mod dialog_modality {
        use super::*;

        #[test]
        fn test_open_dialog_swallows_input() {
            let mut app = test_app();
            fill_form(&mut app);
            app.state.form.set_field(FieldId::Age, "abc".to_string());
            app.handle_key(KeyEvent::new(
                KeyCode::Char('s'),
                crate::platform::SUBMIT_MODIFIER,
            ));
            assert!(app.state.dialogs.has_open());

            // Characters and navigation are ignored while the dialog is open
            app.handle_key(key(KeyCode::Char('x')));
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.state.form.field(FieldId::Name).as_text(), "Ana");
            assert_eq!(app.state.form.active_field_index, 0);
        }

        #[test]
        fn test_enter_dismisses_error_and_preserves_fields() {
            let mut app = test_app();
            fill_form(&mut app);
            app.state.form.set_field(FieldId::Age, "abc".to_string());
            app.handle_key(KeyEvent::new(
                KeyCode::Char('s'),
                crate::platform::SUBMIT_MODIFIER,
            ));
            app.handle_key(key(KeyCode::Enter));
            assert!(!app.state.dialogs.has_open());
            assert_eq!(app.state.form.field(FieldId::Age).as_text(), "abc");
        }

        #[test]
        fn test_esc_dismisses_success_and_clears_form() {
            let mut app = test_app();
            fill_form(&mut app);
            app.state.form.set_active_field(SUBMIT_BUTTON_INDEX);
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.state.phase, FormPhase::Editing);
            for id in FieldId::ALL {
                assert_eq!(app.state.form.field(id).as_text(), "");
            }
        }

        #[test]
        fn test_mouse_ignored_while_dialog_open() {
            let mut app = test_app();
            app.state.form.set_active_field(SUBMIT_BUTTON_INDEX);
            app.handle_key(key(KeyCode::Enter)); // MissingField dialog
            app.handle_mouse(click(FIELDS_TOP));
            assert!(app.state.form.is_button_row_active());
        }
    }

    mod mouse {
        use super::*;

        #[test]
        fn test_hit_target_maps_field_rows() {
            // Border row is not a target
            assert_eq!(App::hit_target(0), None);
            // Each field box spans FIELD_HEIGHT rows
            assert_eq!(App::hit_target(1), Some(HitTarget::Field(0)));
            assert_eq!(App::hit_target(3), Some(HitTarget::Field(0)));
            assert_eq!(App::hit_target(4), Some(HitTarget::Field(1)));
            assert_eq!(App::hit_target(7), Some(HitTarget::Field(2)));
            assert_eq!(App::hit_target(10), Some(HitTarget::Field(3)));
            assert_eq!(App::hit_target(12), Some(HitTarget::Field(3)));
        }

        #[test]
        fn test_hit_target_maps_button_rows() {
            // Spacer row between fields and button is not a target
            assert_eq!(App::hit_target(13), None);
            assert_eq!(App::hit_target(14), Some(HitTarget::SubmitButton));
            assert_eq!(App::hit_target(16), Some(HitTarget::SubmitButton));
            assert_eq!(App::hit_target(17), None);
        }

        #[test]
        fn test_click_focuses_field() {
            let mut app = test_app();
            app.handle_mouse(click(10));
            assert_eq!(app.state.form.active_field_index, 3);
        }

        #[test]
        fn test_click_on_button_submits() {
            let mut app = test_app();
            fill_form(&mut app);
            app.handle_mouse(click(14));
            assert_eq!(app.state.phase, FormPhase::Submitted);
        }

        #[test]
        fn test_non_left_click_is_ignored() {
            let mut app = test_app();
            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::Moved,
                column: 2,
                row: 10,
                modifiers: KeyModifiers::NONE,
            });
            assert_eq!(app.state.form.active_field_index, 0);
        }
    }
}
