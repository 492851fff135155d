//! Scroll position of the country table.

/// Rows moved by PageUp/PageDown.
pub const PAGE_ROWS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Index of the first visible row.
    pub offset: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move by `delta` rows, staying within `0..total`.
    pub fn scroll_by(&mut self, delta: isize, total: usize) {
        let max = total.saturating_sub(1);
        self.offset = self.offset.saturating_add_signed(delta).min(max);
    }

    pub fn clamp(&mut self, total: usize) {
        self.offset = self.offset.min(total.saturating_sub(1));
    }

    /// Offset that keeps the last page full when `visible` rows fit on screen.
    pub fn effective_offset(&self, total: usize, visible: usize) -> usize {
        self.offset.min(total.saturating_sub(visible))
    }
}
