//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let banner = app.state.banner.as_ref();

    let screen = layout::create_layout(area, banner.is_some());

    layout::draw_header(frame, screen.header);

    if let Some(banner) = banner {
        layout::draw_banner(frame, screen.banner, banner);
    }

    forms::draw_quote_form(frame, screen.form, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
