//! Field rendering utilities for the form

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line form field box with label, value and cursor
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let (text_style, border_style) = if is_active {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::Cyan),
        )
    } else {
        (
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let cursor = if is_active { "▌" } else { "" };

    // An empty inactive field shows its placeholder hint
    let line = if field.is_empty() && !is_active {
        Line::from(Span::styled(
            field.placeholder.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(vec![
            Span::styled(field.as_text().to_string(), text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
