//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::Notification;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a validation-error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, notification: &Notification) {
    let hint = vec![
        Span::raw("Pressione "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ou "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" para fechar"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &notification.title,
            accent: Color::Red,
            message: &notification.message,
            hint,
            max_width: 60,
        },
    );
}
