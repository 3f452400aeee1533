//! User interface rendering.

mod keymap_bar;
mod maps;
mod status_bar;
mod theme;

use crate::app::MapViewer;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, viewer: &MapViewer) {
    let colors = ThemeColors::from_theme(&viewer.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    maps::draw_tabs(f, viewer, chunks[0], &colors);
    maps::draw_body(f, viewer, chunks[1], &colors);
    status_bar::draw_status(f, chunks[2], &viewer.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], &colors);
}
