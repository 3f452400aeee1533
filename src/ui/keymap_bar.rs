//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

const KEYMAP: &str = "q/Esc:quit | Tab/hl:domain | jk/↑↓:file | Space:show/hide | c/y:copy table | T:theme";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(KEYMAP).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
