//! Commands that keyboard input can trigger.

use crate::models::MetricKind;

/// A user action, decoupled from the key that triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // Global
    Quit,
    ToggleHelp,
    Reload,

    // Dashboard
    OpenPicker,
    SelectWorldwide,
    SetMetric(MetricKind),
    NextMetric,
    PrevMetric,
    ScrollUp(usize),
    ScrollDown(usize),
    ScrollTop,
    ScrollBottom,

    // Picker overlay
    PickerUp,
    PickerDown,
    PickerConfirm,
    PickerCancel,
    PickerBackspace,
    PickerInput(char),

    /// Key should be ignored
    Noop,
}

impl Command {
    /// Returns true if this command should mark the app as dirty (needs redraw).
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }

    /// Short label for the help overlay.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Quit => "Quit",
            Command::ToggleHelp => "Toggle this help",
            Command::Reload => "Reload data",
            Command::OpenPicker => "Choose country",
            Command::SelectWorldwide => "Show worldwide",
            Command::SetMetric(MetricKind::Cases) => "Show cases",
            Command::SetMetric(MetricKind::Recovered) => "Show recovered",
            Command::SetMetric(MetricKind::Deaths) => "Show deaths",
            Command::NextMetric => "Next metric",
            Command::PrevMetric => "Previous metric",
            Command::ScrollUp(_) => "Scroll table up",
            Command::ScrollDown(_) => "Scroll table down",
            Command::ScrollTop => "Table top",
            Command::ScrollBottom => "Table bottom",
            Command::PickerUp => "Previous entry",
            Command::PickerDown => "Next entry",
            Command::PickerConfirm => "Select entry",
            Command::PickerCancel => "Close picker",
            Command::PickerBackspace => "Delete filter character",
            Command::PickerInput(_) => "Filter",
            Command::Noop => "",
        }
    }
}
