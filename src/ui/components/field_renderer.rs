//! Rendering for form fields and checkboxes

use super::super::theme::Palette;
use crate::state::{FormField, Validity};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field height in rows (bordered input box + message line)
pub const FIELD_HEIGHT: u16 = 4;

/// Render a labeled input box with its validation message line below.
/// Border color tracks focus and validation state.
pub fn render_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Validation message
        ])
        .split(area);

    let border_style = if is_active {
        Style::default().fg(palette.accent)
    } else {
        match field.validity {
            Validity::Invalid(_) => Style::default().fg(palette.error),
            Validity::Valid => Style::default().fg(palette.success),
            Validity::Unchecked => Style::default().fg(palette.muted),
        }
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::styled(field.display_value(), Style::default().fg(palette.text)),
        Span::styled(cursor, Style::default().fg(palette.accent)),
    ]));

    let mut title = format!(" {} ", field.label);
    if field.masked && field.revealed {
        title.push_str("(visible) ");
    }
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(content.block(block), chunks[0]);

    if let Some(message) = field.validity.message() {
        let message = Paragraph::new(format!(" {message}")).style(Style::default().fg(palette.error));
        frame.render_widget(message, chunks[1]);
    }
}

/// Render a single-row checkbox
pub fn render_checkbox(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    checked: bool,
    is_active: bool,
    palette: &Palette,
) {
    let marker = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.text)
    };
    let checkbox = Paragraph::new(format!(" {marker} {label}")).style(style);
    frame.render_widget(checkbox, area);
}
