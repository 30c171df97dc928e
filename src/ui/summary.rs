//! Latest-sample summary line.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{formatters, ThemeColors};
use crate::samples::SampleSeries;

/// Draw a one-line readout of the most recent sample's statistics.
pub(super) fn draw_summary(
    f: &mut Frame<'_>,
    area: Rect,
    samples: &SampleSeries,
    colors: &ThemeColors,
) {
    let line = match samples.latest() {
        Some((index, record)) => {
            let mut spans = vec![Span::styled(
                format!("Sample #{}  ", index),
                Style::default().fg(colors.yellow),
            )];
            let fields = [
                ("min", record.min),
                ("max", record.max),
                ("avg", record.average),
                ("med", record.median),
                ("p90", record.p90),
                ("p95", record.p95),
                ("p99", record.p99),
            ];
            for (name, value) in fields {
                spans.push(Span::styled(
                    format!("{} ", name),
                    Style::default().fg(colors.green),
                ));
                spans.push(Span::styled(
                    format!("{}  ", formatters::format_stat_value(value)),
                    Style::default().fg(colors.aqua),
                ));
            }
            Line::from(spans)
        },
        None => Line::from(Span::styled(
            "No samples yet. Click Add or press 'a'.",
            Style::default().fg(colors.gray),
        )),
    };

    f.render_widget(Paragraph::new(line), area);
}
