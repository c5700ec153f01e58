//! Account creation screen

use super::components::{render_checkbox, render_field, render_submit_button, BUTTON_HEIGHT, FIELD_HEIGHT};
use super::layout::centered_column;
use super::theme::Palette;
use crate::app::App;
use crate::state::{password_strength, Form, RegisterForm, StrengthLevel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Gauge,
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let column = centered_column(area, 48);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // First name
            Constraint::Length(FIELD_HEIGHT),  // Last name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(1),             // Strength meter
            Constraint::Length(FIELD_HEIGHT),  // Confirm password
            Constraint::Length(1),             // Agreement
            Constraint::Length(1),             // Spacer
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(column);

    let form = &app.state.register_form;
    let active = form.active_field();

    render_field(frame, chunks[0], &form.first_name, active == 0, palette);
    render_field(frame, chunks[1], &form.last_name, active == 1, palette);
    render_field(
        frame,
        chunks[2],
        &form.email,
        active == RegisterForm::EMAIL_ROW,
        palette,
    );
    render_field(frame, chunks[3], &form.password, active == 3, palette);
    draw_strength_meter(frame, chunks[4], form.password.value(), palette);
    render_field(frame, chunks[5], &form.confirm_password, active == 4, palette);
    render_checkbox(
        frame,
        chunks[6],
        "I agree to the Terms of Service and Privacy Policy",
        form.agree_terms,
        active == RegisterForm::AGREEMENT_ROW,
        palette,
    );
    render_submit_button(
        frame,
        chunks[8],
        app.state.submit_label(),
        active == RegisterForm::SUBMIT_ROW,
        app.submit_elapsed(),
        palette,
    );
}

/// Live strength bar under the password field; empty until the user
/// has typed something
fn draw_strength_meter(frame: &mut Frame, area: Rect, password: &str, palette: &Palette) {
    if password.is_empty() {
        return;
    }

    let strength = password_strength(password);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(strength_color(strength, palette)).bg(Color::Reset))
        .ratio(strength.ratio())
        .label(strength.label());
    frame.render_widget(gauge, area);
}

fn strength_color(strength: StrengthLevel, palette: &Palette) -> Color {
    match strength {
        StrengthLevel::Weak => palette.error,
        StrengthLevel::Fair => palette.warning,
        StrengthLevel::Good => palette.info,
        StrengthLevel::Strong => palette.success,
    }
}
