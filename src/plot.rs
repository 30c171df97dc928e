//! Chart projection: sample series to plottable points and axis ranges.
//!
//! All functions here are pure; the current time is threaded in by the
//! caller so rendering stays deterministic under test.

use crate::samples::SampleSeries;

/// Width in milliseconds of the synthetic window shown when fewer than two
/// real points exist.
pub const PLACEHOLDER_SPAN_MS: i64 = 2000;

/// Minimum spacing between horizontal tick labels, in time units.
pub const MIN_TICK_SPACING_MS: f64 = 5000.0;

/// Fraction of the value range padded above and below the vertical axis.
const Y_PAD_RATIO: f64 = 0.15;

/// Half-height of the vertical axis when every y-value coincides.
const FLAT_Y_PAD: f64 = 0.5;

/// Plottable projection of a [`SampleSeries`].
///
/// `points` is the real series, one `(index, p95)` pair per sample in
/// ascending index order. `axis_points` is the same sequence extended with
/// synthetic entries when fewer than two samples exist; it defines the axis
/// ranges and always holds at least two entries.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    /// Real data points, one per sample.
    pub points: Vec<(f64, f64)>,
    /// Axis-range-defining points, never fewer than two.
    pub axis_points: Vec<(f64, f64)>,
}

impl PlotData {
    /// Project a series at the given wall-clock time (milliseconds since the
    /// Unix epoch).
    ///
    /// An empty series maps to a flat zero window ending at `now_ms`; a
    /// single sample is twinned with a point `PLACEHOLDER_SPAN_MS` earlier
    /// at the same height so the horizontal range never collapses.
    pub fn from_series(series: &SampleSeries, now_ms: i64) -> Self {
        let points: Vec<(f64, f64)> = series.iter().map(|(k, r)| (k as f64, r.p95)).collect();

        let axis_points = match points.as_slice() {
            [] => vec![
                ((now_ms - PLACEHOLDER_SPAN_MS) as f64, 0.0),
                (now_ms as f64, 0.0),
            ],
            [(x, y)] => vec![(x - PLACEHOLDER_SPAN_MS as f64, *y), (*x, *y)],
            _ => points.clone(),
        };

        Self { points, axis_points }
    }

    /// Horizontal axis bounds: first to last axis point.
    pub fn x_bounds(&self) -> [f64; 2] {
        let first = self.axis_points.first().map(|p| p.0).unwrap_or(0.0);
        let last = self.axis_points.last().map(|p| p.0).unwrap_or(0.0);
        [first, last]
    }

    /// Vertical axis bounds fitted to the axis points.
    pub fn y_bounds(&self) -> [f64; 2] {
        let (min, max) = self
            .axis_points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &(_, y)| {
                (min.min(y), max.max(y))
            });

        if !min.is_finite() || !max.is_finite() {
            return [0.0, 1.0];
        }

        let padding = (max - min) * Y_PAD_RATIO;
        if padding > 0.0 {
            [min - padding, max + padding]
        } else {
            [min - FLAT_Y_PAD, max + FLAT_Y_PAD]
        }
    }
}

/// Evenly spaced horizontal tick values over `bounds`.
///
/// Picks the largest label count, capped at `max_labels`, whose spacing is
/// no finer than [`MIN_TICK_SPACING_MS`]. The two boundary values are always
/// included, so a span narrower than the minimum spacing yields exactly the
/// endpoints.
pub fn x_tick_values(bounds: [f64; 2], max_labels: usize) -> Vec<f64> {
    let span = bounds[1] - bounds[0];
    let fit = if span > 0.0 {
        (span / MIN_TICK_SPACING_MS).floor() as usize + 1
    } else {
        2
    };
    let count = fit.clamp(2, max_labels.max(2));

    (0..count)
        .map(|i| bounds[0] + span * i as f64 / (count - 1) as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW_MS: i64 = 1_722_945_600_000;

    #[test]
    fn empty_series_synthesizes_flat_zero_window() {
        let plot = PlotData::from_series(&SampleSeries::new(), NOW_MS);

        assert!(plot.points.is_empty());
        assert_eq!(
            plot.axis_points,
            vec![((NOW_MS - 2000) as f64, 0.0), (NOW_MS as f64, 0.0)]
        );
        let [x0, x1] = plot.x_bounds();
        assert_eq!(x1 - x0, 2000.0);
    }

    #[test]
    fn single_sample_is_twinned_for_axis_range_only() {
        let series = SampleSeries::with_p95(&[7.5]);
        let plot = PlotData::from_series(&series, NOW_MS);

        assert_eq!(plot.points, vec![(0.0, 7.5)]);
        assert_eq!(plot.axis_points, vec![(-2000.0, 7.5), (0.0, 7.5)]);
        assert_eq!(plot.x_bounds(), [-2000.0, 0.0]);
    }

    #[test]
    fn multiple_samples_pass_through_unmodified() {
        let series = SampleSeries::with_p95(&[1.0, 3.0, 2.0]);
        let plot = PlotData::from_series(&series, NOW_MS);

        assert_eq!(plot.points, vec![(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)]);
        assert_eq!(plot.axis_points, plot.points);

        let [y_min, y_max] = plot.y_bounds();
        assert!(y_min <= 1.0 && y_max >= 3.0);
    }

    #[test]
    fn points_are_in_ascending_index_order() {
        let series = SampleSeries::with_p95(&[5.0, 4.0, 3.0, 2.0, 1.0]);
        let plot = PlotData::from_series(&series, NOW_MS);

        assert!(plot.points.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn flat_series_gets_non_degenerate_vertical_range() {
        let plot = PlotData::from_series(&SampleSeries::new(), NOW_MS);
        let [y_min, y_max] = plot.y_bounds();

        assert_eq!(y_min, -0.5);
        assert_eq!(y_max, 0.5);
    }

    #[test]
    fn varied_series_pads_vertical_range() {
        let series = SampleSeries::with_p95(&[0.0, 10.0]);
        let plot = PlotData::from_series(&series, NOW_MS);

        assert_eq!(plot.y_bounds(), [-1.5, 11.5]);
    }

    #[test]
    fn tick_spacing_never_drops_below_minimum() {
        let ticks = x_tick_values([0.0, 20_000.0], 10);

        assert_eq!(ticks.len(), 5);
        for pair in ticks.windows(2) {
            assert!(pair[1] - pair[0] >= MIN_TICK_SPACING_MS);
        }
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[4], 20_000.0);
    }

    #[test]
    fn narrow_span_keeps_only_the_endpoints() {
        let ticks = x_tick_values([0.0, 2000.0], 10);
        assert_eq!(ticks, vec![0.0, 2000.0]);
    }

    #[test]
    fn tick_count_is_capped_by_available_labels() {
        let ticks = x_tick_values([0.0, 1_000_000.0], 6);
        assert_eq!(ticks.len(), 6);
    }
}
