//! Application state and logic.

use ratatui::layout::{Position, Rect};

use crate::samples::SampleSeries;
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Latency samples shown in the chart.
    pub samples: SampleSeries,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Screen region of the Add button, recorded at draw time.
    pub add_button: Option<Rect>,
    /// Screen region of the Remove button, recorded at draw time.
    pub remove_button: Option<Rect>,
}

impl App {
    /// Create a new application instance.
    pub fn new(theme: Theme) -> Self {
        Self {
            samples: SampleSeries::new(),
            status: "Ready".to_string(),
            theme,
            add_button: None,
            remove_button: None,
        }
    }

    /// Append a zeroed sample to the series.
    pub fn add_sample(&mut self) {
        let index = self.samples.add();
        self.status = format!("Added sample #{}", index);
        tracing::debug!("Added sample {}", index);
    }

    /// Remove the most recent sample, if any.
    pub fn remove_sample(&mut self) {
        match self.samples.remove_latest() {
            Ok(index) => {
                self.status = format!("Removed sample #{}", index);
                tracing::debug!("Removed sample {}", index);
            },
            Err(_) => {
                self.status = "No samples to remove".to_string();
                tracing::debug!("Remove requested on empty series");
            },
        }
    }

    /// Copy the sample table to the clipboard as TSV.
    pub fn copy_samples(&mut self) {
        if self.samples.is_empty() {
            self.status = "No samples to copy".to_string();
            return;
        }
        match util::copy_samples_tsv(&self.samples) {
            Ok(_) => self.status = format!("Copied {} samples!", self.samples.len()),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Show key help in the status bar.
    pub fn show_help(&mut self) {
        self.status =
            "Help: q=quit, a=add, r=remove, y=copy TSV, T=theme, or click the buttons".to_string();
    }

    /// Dispatch a left click at the given terminal coordinates.
    pub fn click_at(&mut self, column: u16, row: u16) {
        let position = Position::new(column, row);
        if self.add_button.is_some_and(|r| r.contains(position)) {
            self.add_sample();
        } else if self.remove_button.is_some_and(|r| r.contains(position)) {
            self.remove_sample();
        }
    }
}
