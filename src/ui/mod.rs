//! UI module for rendering the TUI

mod components;
mod layout;
mod login;
mod register;
mod reset;
mod theme;

use crate::app::App;
use crate::state::View;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = theme::palette(app.state.theme);

    // Themed background behind everything
    let background = Block::default().style(
        Style::default()
            .bg(palette.background)
            .fg(palette.text),
    );
    frame.render_widget(background, area);

    let (header_area, content_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app, palette);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Login => login::draw(frame, content_area, app, palette),
        View::Register => register::draw(frame, content_area, app, palette),
        View::Reset => reset::draw(frame, content_area, app, palette),
    }

    layout::draw_status_bar(frame, status_area, app, palette);

    // Toast overlay renders above the content
    layout::draw_notification(frame, app, palette);
}
