//! Country picker overlay state.
//!
//! The entry list is rebuilt from the loaded options on every query change:
//! "Worldwide" always first, then the options matching the filter.

use crate::models::{CountryOption, Selection, WORLDWIDE};

/// Maximum visible rows in the picker viewport
pub const MAX_VISIBLE_ROWS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub label: String,
    /// Iso code shown next to the label, `None` for Worldwide.
    pub code: Option<String>,
    pub selection: Selection,
}

#[derive(Debug, Clone, Default)]
pub struct PickerState {
    pub visible: bool,
    pub query: String,
    pub entries: Vec<PickerEntry>,
    pub selected_index: usize,
    pub scroll_offset: usize,
}

impl PickerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, options: &[CountryOption]) {
        self.visible = true;
        self.query.clear();
        self.selected_index = 0;
        self.scroll_offset = 0;
        self.refresh(options);
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.query.clear();
        self.entries.clear();
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    pub fn push_char(&mut self, c: char, options: &[CountryOption]) {
        self.query.push(c);
        self.refresh(options);
    }

    pub fn backspace(&mut self, options: &[CountryOption]) {
        self.query.pop();
        self.refresh(options);
    }

    /// Rebuild entries from the current query, e.g. after the country list reloads.
    pub fn refresh(&mut self, options: &[CountryOption]) {
        let needle = self.query.trim().to_lowercase();
        let worldwide = needle.is_empty() || WORLDWIDE.to_lowercase().contains(&needle);

        self.entries = worldwide
            .then(|| PickerEntry {
                label: WORLDWIDE.to_string(),
                code: None,
                selection: Selection::Global,
            })
            .into_iter()
            .chain(options.iter().filter(|o| o.matches(&needle)).map(|o| PickerEntry {
                label: o.name.clone(),
                code: Some(o.iso_code.to_string()),
                selection: Selection::Country(o.iso_code.clone()),
            }))
            .collect();

        self.validate_selection();
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.ensure_visible();
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.entries.len() {
            self.selected_index += 1;
        }
        self.ensure_visible();
    }

    pub fn selected(&self) -> Option<&PickerEntry> {
        self.entries.get(self.selected_index)
    }

    /// Entries inside the viewport, with their absolute index.
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &PickerEntry)> {
        self.entries
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(MAX_VISIBLE_ROWS)
    }

    fn validate_selection(&mut self) {
        if self.selected_index >= self.entries.len() {
            self.selected_index = self.entries.len().saturating_sub(1);
        }
        self.ensure_visible();
    }

    fn ensure_visible(&mut self) {
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + MAX_VISIBLE_ROWS {
            self.scroll_offset = self.selected_index + 1 - MAX_VISIBLE_ROWS;
        }
    }
}
