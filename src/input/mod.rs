//! Keyboard input: key events become [`Command`]s, which `App` executes.

mod command;
mod keybindings;
mod registry;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig, DASHBOARD_BINDINGS};
pub use registry::CommandRegistry;

use crossterm::event::KeyEvent;

use crate::app::App;
use crate::models::Selection;

impl App {
    /// Translate and execute a key press.
    pub fn handle_key(&mut self, registry: &CommandRegistry, key: KeyEvent) {
        let cmd = registry.dispatch(key, self.picker.visible);
        self.execute_command(cmd);
    }

    /// Execute a command. Returns false for `Noop`.
    pub fn execute_command(&mut self, cmd: Command) -> bool {
        if cmd.marks_dirty() {
            self.mark_dirty();
        }

        match cmd {
            Command::Quit => self.quit(),
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::Reload => self.reload(),
            Command::OpenPicker => {
                self.show_help = false;
                self.picker.open(&self.state.options);
            }
            Command::SelectWorldwide => self.request(Selection::Global),
            Command::SetMetric(metric) => self.set_metric(metric),
            Command::NextMetric => self.cycle_metric(true),
            Command::PrevMetric => self.cycle_metric(false),
            Command::ScrollUp(rows) => self.state.scroll_table(-(rows as isize)),
            Command::ScrollDown(rows) => self.state.scroll_table(rows as isize),
            Command::ScrollTop => self.state.table_scroll.offset = 0,
            Command::ScrollBottom => self.state.scroll_table(isize::MAX),
            Command::PickerUp => self.picker.move_up(),
            Command::PickerDown => self.picker.move_down(),
            Command::PickerConfirm => {
                let choice = self.picker.selected().map(|entry| entry.selection.clone());
                self.picker.close();
                if let Some(selection) = choice {
                    self.request(selection);
                }
            }
            Command::PickerCancel => self.picker.close(),
            Command::PickerBackspace => self.picker.backspace(&self.state.options),
            Command::PickerInput(c) => self.picker.push_char(c, &self.state.options),
            Command::Noop => return false,
        }
        true
    }

    /// `select`, with a rejection only logged; the status bar already shows it.
    fn request(&mut self, selection: Selection) {
        if let Err(err) = self.select(selection) {
            tracing::warn!(error = %err, "selection rejected");
        }
    }
}
