//! Button component for TUI

use super::super::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Duration;

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Braille spinner shown on a busy submit button
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;

/// Render the submit button. While `busy` carries the elapsed
/// submission time a spinner is animated and the button renders dimmed.
pub fn render_submit_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_active: bool,
    busy: Option<Duration>,
    palette: &Palette,
) {
    let (content, text_style, border_style) = if let Some(elapsed) = busy {
        let index = (elapsed.as_millis() / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
        (
            format!(" {} {label} ", SPINNER_FRAMES[index]),
            Style::default().fg(palette.muted),
            Style::default().fg(palette.muted),
        )
    } else if is_active {
        (
            format!(" {label} "),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(palette.accent),
        )
    } else {
        (
            format!(" {label} "),
            Style::default().fg(palette.text),
            Style::default().fg(palette.muted),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let paragraph = Paragraph::new(content)
        .style(text_style)
        .centered()
        .block(block);

    frame.render_widget(paragraph, area);
}
