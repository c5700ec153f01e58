//! Sign-in screen

use super::components::{render_checkbox, render_field, render_submit_button, BUTTON_HEIGHT, FIELD_HEIGHT};
use super::layout::centered_column;
use super::theme::Palette;
use crate::app::App;
use crate::state::{Form, LoginForm};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let column = centered_column(area, 48);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(1),             // Remember me
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(3),             // Links
            Constraint::Min(0),
        ])
        .split(column);

    let form = &app.state.login_form;
    let active = form.active_field();

    render_field(frame, chunks[0], &form.email, active == 0, palette);
    render_field(
        frame,
        chunks[1],
        &form.password,
        active == LoginForm::PASSWORD_ROW,
        palette,
    );
    render_checkbox(
        frame,
        chunks[2],
        "Remember me",
        form.remember_me,
        active == LoginForm::REMEMBER_ROW,
        palette,
    );
    render_submit_button(
        frame,
        chunks[4],
        app.state.submit_label(),
        active == LoginForm::SUBMIT_ROW,
        app.submit_elapsed(),
        palette,
    );

    let links = Paragraph::new(vec![
        Line::from(Span::styled(
            " New here? Press ^N to create an account",
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            " Forgot your password? Press ^F to reset it",
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            " Or continue with ^G Google Workspace / ^B GitHub Enterprise",
            Style::default().fg(palette.muted),
        )),
    ]);
    frame.render_widget(links, chunks[5]);
}
