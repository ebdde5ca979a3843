//! Notification port and modal dialog queue

use crate::state::{Registration, ValidationError};
use std::collections::VecDeque;

/// Kind of blocking notification shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// A blocking notification request raised by the form controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    /// Validation-failure notification with its instructional message
    pub fn error(err: ValidationError) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: "Erro".to_string(),
            message: err.to_string(),
        }
    }

    /// Success notification echoing the snapshot, fields in fixed order
    pub fn success(registration: &Registration) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Cadastro Realizado!".to_string(),
            message: format!(
                "Nome: {}\nE-mail: {}\nIdade: {}\nDocumento: {}",
                registration.name, registration.email, registration.age, registration.document
            ),
        }
    }
}

/// Port through which the form controller surfaces notifications,
/// enabling testing without a rendering engine
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink {
    /// Present a notification to the user
    fn notify(&mut self, notification: Notification);
}

/// Queue of pending modal dialogs; the frontmost blocks all other input
#[derive(Debug, Default)]
pub struct DialogQueue {
    queue: VecDeque<Notification>,
}

impl DialogQueue {
    /// Whether a dialog is currently open
    pub fn has_open(&self) -> bool {
        !self.queue.is_empty()
    }

    /// The frontmost dialog, if any
    pub fn current(&self) -> Option<&Notification> {
        self.queue.front()
    }

    /// Dismiss the frontmost dialog, returning it
    pub fn dismiss(&mut self) -> Option<Notification> {
        self.queue.pop_front()
    }
}

impl NotificationSink for DialogQueue {
    fn notify(&mut self, notification: Notification) {
        self.queue.push_back(notification);
    }
}
