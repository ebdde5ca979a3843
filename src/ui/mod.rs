//! UI module for rendering the TUI

pub mod components;
pub mod forms;
mod layout;

use crate::app::App;
use crate::state::NotificationKind;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the form screen above the status bar
    let content_area = layout::content_area(area);
    forms::draw_registration(frame, content_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Draw any open modal dialog on top
    if let Some(notification) = app.state.dialogs.current() {
        match notification.kind {
            NotificationKind::Error => components::render_error_dialog(frame, notification),
            NotificationKind::Success => components::render_success_dialog(frame, notification),
        }
    }
}
