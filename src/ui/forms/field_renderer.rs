//! Field rendering utilities for forms

use crate::state::{FieldKind, QuoteField, QuoteForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field (top border + value + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Draw one quote field with its label, value and inline error
pub fn draw_field(frame: &mut Frame, area: Rect, form: &QuoteForm, field: QuoteField) {
    let is_active = form.active() == Some(field);
    let error = form.errors.get(field);

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = form.request.display_value(field);
    let content = match FieldKind::of(field) {
        FieldKind::Text => text_line(&value, field.placeholder(), is_active),
        FieldKind::Choice => choice_line(&value, field.placeholder(), is_active),
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn text_line<'a>(value: &str, placeholder: &'a str, is_active: bool) -> Line<'a> {
    let cursor = if is_active { "▌" } else { "" };

    if value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        let style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(value.to_string(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    }
}

fn choice_line<'a>(value: &str, placeholder: &'a str, is_active: bool) -> Line<'a> {
    let arrow_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_span = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        let mut style = Style::default();
        if is_active {
            style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
        }
        Span::styled(value.to_string(), style)
    };

    Line::from(vec![
        Span::styled("◀ ", arrow_style),
        value_span,
        Span::styled(" ▶", arrow_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_text_shows_placeholder() {
        let line = text_line("", "Toyota", false);
        assert_eq!(line_text(&line), "Toyota");
    }

    #[test]
    fn test_active_text_shows_cursor_after_value() {
        let line = text_line("Fiat", "Toyota", true);
        assert_eq!(line_text(&line), "Fiat▌");
    }

    #[test]
    fn test_choice_wraps_value_in_arrows() {
        let line = choice_line("Manual", "Selecione uma opção", false);
        assert_eq!(line_text(&line), "◀ Manual ▶");
        let line = choice_line("", "Selecione uma opção", true);
        assert_eq!(line_text(&line), "◀ Selecione uma opção ▶");
    }
}
