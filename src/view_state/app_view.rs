//! Borrowed snapshot handed to the renderer.

use super::{PickerState, ViewState};

/// Complete view state for one frame.
///
/// Built by `App::view_state()`; UI code takes this instead of `App`, so
/// `ui` never depends on `app`.
pub struct AppViewState<'a> {
    pub view: &'a ViewState,
    pub picker: &'a PickerState,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    pub show_help: bool,
}

impl<'a> AppViewState<'a> {
    pub fn new(view: &'a ViewState, picker: &'a PickerState) -> Self {
        Self {
            view,
            picker,
            tick_count: 0,
            show_help: false,
        }
    }

    pub fn with_tick(mut self, tick_count: u64) -> Self {
        self.tick_count = tick_count;
        self
    }

    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }
}
