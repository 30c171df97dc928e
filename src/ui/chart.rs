//! Latency chart rendering.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::{formatters, ThemeColors};
use crate::plot::{x_tick_values, PlotData};

/// Approximate footprint of one `HH:MM:SS` label on the horizontal axis.
const TICK_LABEL_WIDTH: u16 = 10;

/// Draw the latency chart.
///
/// With two or more real points a connecting line is drawn under the
/// per-point markers; a single point draws only its marker; an empty series
/// draws just the axes over the placeholder range.
pub(super) fn draw_chart(f: &mut Frame<'_>, area: Rect, plot: &PlotData, colors: &ThemeColors) {
    let x_bounds = plot.x_bounds();
    let y_bounds = plot.y_bounds();

    let mut datasets = Vec::new();
    if plot.points.len() > 1 {
        datasets.push(
            Dataset::default()
                .name("p95")
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.blue))
                .data(&plot.points),
        );
    }
    if !plot.points.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(colors.yellow))
                .data(&plot.points),
        );
    }

    let max_labels = (area.width / TICK_LABEL_WIDTH).max(2) as usize;
    let x_labels: Vec<String> = x_tick_values(x_bounds, max_labels)
        .into_iter()
        .map(formatters::format_tick_time)
        .collect();

    let x_axis = Axis::default()
        .title("Time")
        .style(Style::default().fg(colors.blue))
        .bounds(x_bounds)
        .labels(x_labels);

    let y_labels = vec![
        formatters::format_latency(y_bounds[0]),
        formatters::format_latency((y_bounds[0] + y_bounds[1]) / 2.0),
        formatters::format_latency(y_bounds[1]),
    ];

    let y_axis = Axis::default()
        .title("Latency (ms)")
        .style(Style::default().fg(colors.blue))
        .bounds(y_bounds)
        .labels(y_labels);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.bg2))
                .title(" Latencies over Time (95%) ")
                .title_style(Style::default().fg(colors.yellow)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}
