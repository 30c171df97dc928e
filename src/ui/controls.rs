//! Add/Remove button row.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::ThemeColors;
use crate::app::App;

/// Width of one button, borders included.
const BUTTON_WIDTH: u16 = 12;

/// Draw the button row and record the hit-test regions on the app.
///
/// The Remove button renders dimmed while the series is empty; clicking it
/// then is a guarded no-op reported in the status bar.
pub(super) fn draw_controls(f: &mut Frame<'_>, area: Rect, app: &mut App, colors: &ThemeColors) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Length(2),
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);

    draw_button(f, chunks[0], "Add", true, colors);
    draw_button(f, chunks[2], "Remove", !app.samples.is_empty(), colors);

    app.add_button = Some(chunks[0]);
    app.remove_button = Some(chunks[2]);
}

fn draw_button(f: &mut Frame<'_>, area: Rect, label: &str, enabled: bool, colors: &ThemeColors) {
    let (text_style, border_style) = if enabled {
        (
            Style::default().fg(colors.fg0).add_modifier(Modifier::BOLD),
            Style::default().fg(colors.blue),
        )
    } else {
        (
            Style::default().fg(colors.gray),
            Style::default().fg(colors.gray),
        )
    };

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(text_style)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    f.render_widget(button, area);
}
