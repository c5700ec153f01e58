//! Layout components (header, status bar, notification overlay)

use super::theme::Palette;
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Split the screen into header, content, and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Center a fixed-width column inside `area`, leaving one blank row at
/// the top
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(1),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(horizontal[1]);

    vertical[1]
}

/// Draw the header with portal title and current screen
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = Line::from(vec![
        Span::styled(
            " SecureCorp Portal ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("— ", Style::default().fg(palette.muted)),
        Span::styled(
            app.state.current_view.title(),
            Style::default().fg(palette.text),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.muted));
    frame.render_widget(Paragraph::new(title).block(block), area);
}

/// Draw the status bar with view-specific key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let hints = get_view_hints(&app.state.current_view);
    let theme_hint = format!("^T:{} mode", app.state.theme.toggle().label());

    let mut spans = vec![Span::styled(
        format!(" {hints}"),
        Style::default().fg(palette.muted),
    )];
    spans.push(Span::styled(
        format!("  {theme_hint}  ^Q:quit "),
        Style::default().fg(palette.muted),
    ));

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Login => {
            "Tab:next  Space:remember  Enter:sign in  ^P:reveal  ^N:register  ^F:reset".to_string()
        }
        View::Register => "Tab:next  Space:agree  Enter:submit  ^P:reveal  Esc:back".to_string(),
        View::Reset => "Tab:next  Enter:send  Esc:back".to_string(),
    }
}

/// Draw the toast notification as an overlay in the top-right corner
pub fn draw_notification(frame: &mut Frame, app: &App, palette: &Palette) {
    let Some(notification) = &app.state.notification else {
        return;
    };

    let area = frame.area();
    let width = (notification.message.chars().count() as u16 + 8).min(area.width);
    let toast_area = Rect {
        x: area.width.saturating_sub(width + 1),
        y: 1,
        width,
        height: 3,
    };

    let color = palette.notification_color(notification.kind);
    let content = Line::from(vec![
        Span::styled(
            format!(" {} ", notification.kind.glyph()),
            Style::default().fg(color),
        ),
        Span::styled(
            notification.message.as_str(),
            Style::default().fg(palette.text),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    frame.render_widget(Clear, toast_area);
    frame.render_widget(Paragraph::new(content).block(block), toast_area);
}
