//! Maps key events to commands based on what has focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Priority: Ctrl+C always quits, then the picker overlay when it is open
/// (unbound printable characters become filter input), then the dashboard.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatch(&self, key: KeyEvent, picker_open: bool) -> Command {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Command::Quit;
        }

        let combo = KeyCombo::new(key.code, key.modifiers);
        if picker_open {
            if let Some(cmd) = self.config.get_picker(&combo) {
                return *cmd;
            }
            return match key.code {
                KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                    Command::PickerInput(c)
                }
                _ => Command::Noop,
            };
        }

        if let Some(cmd) = self.config.get_dashboard(&combo) {
            return *cmd;
        }
        // Some terminals report '?' and BackTab with SHIFT set
        if key.modifiers == KeyModifiers::SHIFT {
            if let Some(cmd) = self.config.get_dashboard(&KeyCombo::plain(key.code)) {
                return *cmd;
            }
        }
        if key.code == KeyCode::BackTab {
            return Command::PrevMetric;
        }
        Command::Noop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MetricKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let registry = CommandRegistry::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.dispatch(ctrl_c, false), Command::Quit);
        assert_eq!(registry.dispatch(ctrl_c, true), Command::Quit);
    }

    #[test]
    fn test_picker_captures_characters() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.dispatch(key(KeyCode::Char('q')), true), Command::PickerInput('q'));
        assert_eq!(registry.dispatch(key(KeyCode::Char('c')), true), Command::PickerInput('c'));
        assert_eq!(registry.dispatch(key(KeyCode::Enter), true), Command::PickerConfirm);
        assert_eq!(registry.dispatch(key(KeyCode::Tab), true), Command::Noop);
    }

    #[test]
    fn test_dashboard_bindings() {
        let registry = CommandRegistry::new();
        assert_eq!(registry.dispatch(key(KeyCode::Char('q')), false), Command::Quit);
        assert_eq!(registry.dispatch(key(KeyCode::Char('/')), false), Command::OpenPicker);
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('3')), false),
            Command::SetMetric(MetricKind::Deaths)
        );
        assert_eq!(registry.dispatch(key(KeyCode::Char('x')), false), Command::Noop);
    }

    #[test]
    fn test_shifted_keys() {
        let registry = CommandRegistry::new();
        let question = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(registry.dispatch(question, false), Command::ToggleHelp);
        assert_eq!(registry.dispatch(key(KeyCode::BackTab), false), Command::PrevMetric);
    }
}
