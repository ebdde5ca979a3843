//! Application state definitions

use crate::state::{DialogQueue, NotificationKind, Registration, RegistrationForm, ValidationError};

/// Lifecycle of the registration screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Fields hold arbitrary text, possibly empty or invalid
    #[default]
    Editing,
    /// A validated snapshot exists and awaits acknowledgement
    Submitted,
}

/// State owned by the single registration screen
#[derive(Debug, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    pub dialogs: DialogQueue,
    pub phase: FormPhase,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form, routing the outcome into the dialog queue.
    ///
    /// Field buffers are only cleared later, on acknowledgement of the
    /// success dialog.
    pub fn submit_form(&mut self) -> Result<Registration, ValidationError> {
        let result = self.form.submit_into(&mut self.dialogs);
        if result.is_ok() {
            self.phase = FormPhase::Submitted;
        }
        result
    }

    /// Dismiss the frontmost dialog.
    ///
    /// Acknowledging a success dialog resets the form and returns the screen
    /// to the editing phase; dismissing an error dialog changes nothing else.
    pub fn acknowledge(&mut self) {
        if let Some(dismissed) = self.dialogs.dismiss() {
            if dismissed.kind == NotificationKind::Success {
                self.form.clear();
                self.phase = FormPhase::Editing;
            }
        }
    }
}
