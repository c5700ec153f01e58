//! Password reset screen

use super::components::{render_field, render_submit_button, BUTTON_HEIGHT, FIELD_HEIGHT};
use super::layout::centered_column;
use super::theme::Palette;
use crate::app::App;
use crate::state::{Form, ResetForm};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let column = centered_column(area, 48);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Intro text
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(column);

    let intro = Paragraph::new(Line::from(
        " Enter your corporate email and we will send reset instructions.",
    ))
    .style(Style::default().fg(palette.muted));
    frame.render_widget(intro, chunks[0]);

    let form = &app.state.reset_form;
    let active = form.active_field();

    render_field(frame, chunks[1], &form.email, active == 0, palette);
    render_submit_button(
        frame,
        chunks[3],
        app.state.submit_label(),
        active == ResetForm::SUBMIT_ROW,
        app.submit_elapsed(),
        palette,
    );
}
