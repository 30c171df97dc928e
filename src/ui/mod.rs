//! User interface rendering.

mod chart;
mod controls;
mod formatters;
mod keymap_bar;
mod status_bar;
mod summary;
mod theme;

pub use theme::ThemeColors;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::App;
use crate::plot::PlotData;

/// Draw the UI.
///
/// `now_ms` is the wall-clock time in milliseconds used for the placeholder
/// axis range when fewer than two samples exist.
pub fn draw(f: &mut Frame<'_>, app: &mut App, now_ms: i64) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Button row
            Constraint::Min(8),    // Chart
            Constraint::Length(1), // Latest-sample summary
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Keymap bar
        ])
        .split(f.area());

    controls::draw_controls(f, chunks[0], app, &colors);

    let plot = PlotData::from_series(&app.samples, now_ms);
    chart::draw_chart(f, chunks[1], &plot, &colors);

    summary::draw_summary(f, chunks[2], &app.samples, &colors);
    status_bar::draw_status(f, chunks[3], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[4], &colors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    const NOW_MS: i64 = 1_722_945_600_000;

    fn render_to_text(app: &mut App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app, NOW_MS)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| {
                let mut line: String = row.iter().map(|cell| cell.symbol()).collect();
                line.push('\n');
                line
            })
            .collect()
    }

    #[test]
    fn renders_title_buttons_and_axis_titles() {
        let mut app = App::new(Theme::GruvboxDark);
        let text = render_to_text(&mut app);

        assert!(text.contains("Latencies over Time (95%)"));
        assert!(text.contains("Add"));
        assert!(text.contains("Remove"));
        assert!(text.contains("Time"));
        assert!(text.contains("Latency (ms)"));
        assert!(app.add_button.is_some());
        assert!(app.remove_button.is_some());
    }

    #[test]
    fn empty_series_renders_hint_and_no_markers() {
        let mut app = App::new(Theme::GruvboxDark);
        let text = render_to_text(&mut app);

        assert!(text.contains("No samples yet"));
        assert!(!text.contains('•'));
    }

    #[test]
    fn single_sample_renders_marker_summary_and_status() {
        let mut app = App::new(Theme::GruvboxDark);
        app.add_sample();
        let text = render_to_text(&mut app);

        assert!(text.contains('•'));
        assert!(text.contains("Sample #0"));
        assert!(text.contains("p95"));
        assert!(text.contains("Added sample #0"));
    }

    #[test]
    fn light_theme_renders_the_same_structure() {
        let mut app = App::new(Theme::GruvboxLight);
        app.add_sample();
        app.add_sample();
        let text = render_to_text(&mut app);

        assert!(text.contains("Latencies over Time (95%)"));
        assert!(text.contains("Sample #1"));
    }
}
