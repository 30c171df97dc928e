//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Main background color.
    pub bg0: Color,
    /// Raised background color (status bar).
    pub bg1: Color,
    /// Border color.
    pub bg2: Color,
    /// Primary text color.
    pub fg0: Color,
    /// Dimmed text color (disabled controls, hints).
    pub gray: Color,
    /// Chart line and axis color.
    pub blue: Color,
    /// Title and marker color.
    pub yellow: Color,
    /// Label text color.
    pub green: Color,
    /// Value text color.
    pub aqua: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg0: Color::Rgb(40, 40, 40),
                bg1: Color::Rgb(60, 56, 54),
                bg2: Color::Rgb(102, 92, 84),
                fg0: Color::Rgb(235, 219, 178),
                gray: Color::Rgb(146, 131, 116),
                blue: Color::Rgb(131, 165, 152),
                yellow: Color::Rgb(250, 189, 47),
                green: Color::Rgb(184, 187, 38),
                aqua: Color::Rgb(142, 192, 124),
            },
            Theme::GruvboxLight => Self {
                bg0: Color::Rgb(251, 245, 234),
                bg1: Color::Rgb(235, 219, 178),
                bg2: Color::Rgb(213, 196, 161),
                fg0: Color::Rgb(60, 56, 54),
                gray: Color::Rgb(124, 111, 100),
                blue: Color::Rgb(7, 102, 120),
                yellow: Color::Rgb(181, 118, 20),
                green: Color::Rgb(121, 116, 14),
                aqua: Color::Rgb(66, 123, 88),
            },
        }
    }
}
