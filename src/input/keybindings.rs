//! Default keybindings.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::models::MetricKind;
use crate::view_state::PAGE_ROWS;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Human-readable key name for the help overlay.
    pub fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            other => format!("{:?}", other),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{}", key)
        } else {
            key
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Bindings while the dashboard has focus
    pub dashboard: HashMap<KeyCombo, Command>,
    /// Bindings while the picker overlay is open; unbound chars become filter input
    pub picker: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Dashboard bindings in help-overlay order.
pub const DASHBOARD_BINDINGS: &[(KeyCombo, Command)] = &[
    (KeyCombo::plain(KeyCode::Char('/')), Command::OpenPicker),
    (KeyCombo::plain(KeyCode::Char('c')), Command::OpenPicker),
    (KeyCombo::plain(KeyCode::Char('g')), Command::SelectWorldwide),
    (KeyCombo::plain(KeyCode::Char('1')), Command::SetMetric(MetricKind::Cases)),
    (KeyCombo::plain(KeyCode::Char('2')), Command::SetMetric(MetricKind::Recovered)),
    (KeyCombo::plain(KeyCode::Char('3')), Command::SetMetric(MetricKind::Deaths)),
    (KeyCombo::plain(KeyCode::Tab), Command::NextMetric),
    (KeyCombo::shift(KeyCode::BackTab), Command::PrevMetric),
    (KeyCombo::plain(KeyCode::Up), Command::ScrollUp(1)),
    (KeyCombo::plain(KeyCode::Down), Command::ScrollDown(1)),
    (KeyCombo::plain(KeyCode::PageUp), Command::ScrollUp(PAGE_ROWS)),
    (KeyCombo::plain(KeyCode::PageDown), Command::ScrollDown(PAGE_ROWS)),
    (KeyCombo::plain(KeyCode::Home), Command::ScrollTop),
    (KeyCombo::plain(KeyCode::End), Command::ScrollBottom),
    (KeyCombo::plain(KeyCode::Char('r')), Command::Reload),
    (KeyCombo::plain(KeyCode::Char('?')), Command::ToggleHelp),
    (KeyCombo::plain(KeyCode::Char('q')), Command::Quit),
    (KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit),
];

const PICKER_BINDINGS: &[(KeyCombo, Command)] = &[
    (KeyCombo::plain(KeyCode::Up), Command::PickerUp),
    (KeyCombo::plain(KeyCode::Down), Command::PickerDown),
    (KeyCombo::plain(KeyCode::Enter), Command::PickerConfirm),
    (KeyCombo::plain(KeyCode::Esc), Command::PickerCancel),
    (KeyCombo::plain(KeyCode::Backspace), Command::PickerBackspace),
    (KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit),
];

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        Self {
            dashboard: DASHBOARD_BINDINGS.iter().copied().collect(),
            picker: PICKER_BINDINGS.iter().copied().collect(),
        }
    }

    pub fn get_dashboard(&self, combo: &KeyCombo) -> Option<&Command> {
        self.dashboard.get(combo)
    }

    pub fn get_picker(&self, combo: &KeyCombo) -> Option<&Command> {
        self.picker.get(combo)
    }
}
