//! Registration screen rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FieldId;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one field box (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Number of field boxes
pub const FIELD_COUNT: u16 = 4;

/// First row of the field boxes, just below the outer border.
/// Mouse hit-testing in `app` relies on this geometry.
pub const FIELDS_TOP: u16 = 1;

/// Draw the registration form: four field boxes, submit button, help line
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Tela de Cadastro Simples ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Nome
            Constraint::Length(FIELD_HEIGHT),  // E-mail
            Constraint::Length(FIELD_HEIGHT),  // Idade
            Constraint::Length(FIELD_HEIGHT),  // Documento
            Constraint::Length(1),             // spacer
            Constraint::Length(BUTTON_HEIGHT), // Cadastrar
            Constraint::Min(0),                // remaining space
            Constraint::Length(1),             // help line
        ])
        .margin(1)
        .split(area);

    for (index, id) in FieldId::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[index],
            app.state.form.field(*id),
            app.state.form.active_field_index == index,
        );
    }

    // Submit button, left-aligned below the fields
    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(chunks[5])[0];
    render_button(
        frame,
        button_area,
        "Cadastrar",
        app.state.form.is_button_row_active(),
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": próximo campo  "),
        Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": cadastrar"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[7]);
}
