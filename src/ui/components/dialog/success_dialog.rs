//! Success dialog component echoing the submitted registration

use super::base::{render_dialog, DialogConfig};
use crate::state::Notification;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the registration acknowledgement dialog centered on the screen
pub fn render_success_dialog(frame: &mut Frame, notification: &Notification) {
    let hint = vec![
        Span::raw("Pressione "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" para continuar"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &notification.title,
            accent: Color::Green,
            message: &notification.message,
            hint,
            max_width: 60,
        },
    );
}
