//! Keymap help bar UI component.

use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

use super::ThemeColors;

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let keymap_text = "q:quit | a:add | r:remove | y:copy | T:theme | ?:help | click:buttons";

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.gray).bg(colors.bg0));

    f.render_widget(paragraph, area);
}
