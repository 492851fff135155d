//! Color theme constants.

use ratatui::style::Color;

use crate::models::MetricKind;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Country outlines on the map
pub const COLOR_LAND: Color = Color::Gray;

/// Cross marking the selected country on the map
pub const COLOR_SELECTED: Color = Color::Yellow;

pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_LOADING: Color = Color::Cyan;

pub const COLOR_CASES: Color = Color::Red;
pub const COLOR_RECOVERED: Color = Color::Green;
pub const COLOR_DEATHS: Color = Color::LightRed;

/// Marker, graph and highlight color per metric.
pub fn metric_color(metric: MetricKind) -> Color {
    match metric {
        MetricKind::Cases => COLOR_CASES,
        MetricKind::Recovered => COLOR_RECOVERED,
        MetricKind::Deaths => COLOR_DEATHS,
    }
}

/// Spinner characters for loading animation.
pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn spinner(tick: u64) -> char {
    SPINNER_CHARS[(tick as usize) % SPINNER_CHARS.len()]
}
