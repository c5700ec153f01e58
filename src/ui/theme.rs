//! Color palettes for the light and dark themes

use crate::state::{NotificationKind, Theme};
use ratatui::style::Color;

/// Resolved colors for one theme
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
}

const LIGHT: Palette = Palette {
    background: Color::White,
    text: Color::Black,
    muted: Color::DarkGray,
    accent: Color::Blue,
    success: Color::Green,
    error: Color::Red,
    warning: Color::Yellow,
    info: Color::Cyan,
};

const DARK: Palette = Palette {
    background: Color::Black,
    text: Color::White,
    muted: Color::DarkGray,
    accent: Color::Cyan,
    success: Color::LightGreen,
    error: Color::LightRed,
    warning: Color::LightYellow,
    info: Color::LightCyan,
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

impl Palette {
    /// Accent color for a toast of the given kind
    pub fn notification_color(&self, kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Success => self.success,
            NotificationKind::Error => self.error,
            NotificationKind::Warning => self.warning,
            NotificationKind::Info => self.info,
        }
    }
}
