//! latview - a terminal latency percentile chart.
//!
//! latview renders a single full-screen terminal view: a "Latencies over
//! Time (95%)" line chart over an in-memory series of latency statistics,
//! with Add and Remove buttons that grow or shrink the series. Samples are
//! kept in an ordered map keyed by insertion position; only the 95th
//! percentile of each record is plotted.
//!
//! # Features
//!
//! - Interactive Add/Remove buttons (mouse click or `a`/`r` keys)
//! - Auto-scaled axes with wall-clock tick labels
//! - Latest-sample statistics readout
//! - Gruvbox color themes
//! - Clipboard TSV export of the sample table
//!
//! # Example
//!
//! ```
//! use latview::plot::PlotData;
//! use latview::samples::SampleSeries;
//!
//! let mut series = SampleSeries::new();
//! series.add();
//!
//! let plot = PlotData::from_series(&series, 0);
//! assert_eq!(plot.points, vec![(0.0, 0.0)]);
//! assert_eq!(plot.x_bounds(), [-2000.0, 0.0]);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod error;
pub mod plot;
pub mod samples;
pub mod ui;
pub mod util;

pub use error::{LatviewError, Result};
