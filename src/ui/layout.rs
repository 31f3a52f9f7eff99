//! Layout components (header, banner, status bar)

use crate::app::App;
use crate::state::{Banner, BannerKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height of the header block
const HEADER_HEIGHT: u16 = 3;
/// Height of the banner region when a banner is shown
const BANNER_HEIGHT: u16 = 3;

/// Areas of the screen, top to bottom
pub struct ScreenLayout {
    pub header: Rect,
    pub banner: Rect,
    pub form: Rect,
}

/// Split the screen into header, banner, form and the status bar line
pub fn create_layout(area: Rect, has_banner: bool) -> ScreenLayout {
    let banner_height = if has_banner { BANNER_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Title
            Constraint::Length(banner_height), // Success / error banner
            Constraint::Min(0),                // Form
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        banner: chunks[1],
        form: chunks[2],
    }
}

/// Draw the title and subtitle
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "PROAUTO · Solicite seu Orçamento",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Preencha os dados abaixo para receber uma proposta personalizada",
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draw the success or error banner above the form
pub fn draw_banner(frame: &mut Frame, area: Rect, banner: &Banner) {
    let (color, title) = match banner.kind {
        BannerKind::Success => (Color::Green, " Enviado "),
        BannerKind::Error => (Color::Red, " Erro "),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(banner.message.as_str())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission status
    let indicator = if app.is_submitting() {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    // Webhook host
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        endpoint_host(&app.state.webhook_url),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the field under the cursor
fn get_hints(app: &App) -> String {
    let form = &app.state.form;
    if app.is_submitting() {
        "Enviando...".to_string()
    } else if form.is_submit_row_active() {
        "Enter:enviar  Tab:next  Shift+Tab:prev".to_string()
    } else if form.active().is_some_and(|f| f.is_choice()) {
        "←/→/Space:opção  Tab:next  ^S:enviar".to_string()
    } else {
        "Tab:next  Shift+Tab:prev  ^S:enviar".to_string()
    }
}

/// Host part of the webhook URL, for display
fn endpoint_host(url: &str) -> &str {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    without_scheme.split('/').next().unwrap_or(without_scheme)
}
