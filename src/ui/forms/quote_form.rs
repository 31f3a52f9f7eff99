//! Quote form rendering
//!
//! Personal information and the submit button on the left, vehicle
//! information on the right.

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::QuoteField;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the quote form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_personal_section(frame, columns[0], app);
    draw_vehicle_section(frame, columns[1], app);
}

fn personal_fields() -> impl Iterator<Item = QuoteField> {
    QuoteField::ALL.into_iter().filter(|f| f.is_personal())
}

fn vehicle_fields() -> impl Iterator<Item = QuoteField> {
    QuoteField::ALL.into_iter().filter(|f| !f.is_personal())
}

fn section_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
}

fn field_rows(count: usize) -> Vec<Constraint> {
    std::iter::repeat(Constraint::Length(FIELD_HEIGHT))
        .take(count)
        .collect()
}

fn draw_personal_section(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let fields: Vec<_> = personal_fields().collect();
    let focused = form.active().is_some_and(|f| f.is_personal()) || form.is_submit_row_active();

    let block = section_block("Informações Pessoais", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = field_rows(fields.len());
    constraints.push(Constraint::Length(1)); // spacer
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Required note
    constraints.push(Constraint::Min(0)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        draw_field(frame, chunks[i], form, *field);
    }

    let n = fields.len();
    render_submit_button(
        frame,
        chunks[n + 1],
        form.is_submit_row_active(),
        app.is_submitting(),
    );

    let note = Paragraph::new(Line::from(Span::styled(
        "* Todos os campos são obrigatórios",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(note, chunks[n + 2]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "Suas informações estão seguras conosco. Responderemos em breve.",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[n + 3]);
}

fn draw_vehicle_section(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let fields: Vec<_> = vehicle_fields().collect();
    let focused = form.active().is_some_and(|f| !f.is_personal());

    let block = section_block("Informações do Veículo", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = field_rows(fields.len());
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (i, field) in fields.iter().enumerate() {
        draw_field(frame, chunks[i], form, *field);
    }
}
