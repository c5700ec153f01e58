//! Reusable UI components

mod button;
mod field_renderer;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use field_renderer::{render_checkbox, render_field, FIELD_HEIGHT};
