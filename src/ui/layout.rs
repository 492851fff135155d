//! Responsive layout.
//!
//! `LayoutContext` wraps the terminal size; `DashboardLayout` splits the
//! screen into the dashboard regions for that size.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Below this the map/graph column and the table stack vertically
    pub const SM_WIDTH: u16 = 100;

    pub const XS_HEIGHT: u16 = 16;
    pub const SM_HEIGHT: u16 = 30;
}

#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    pub fn should_stack_panels(&self) -> bool {
        self.is_narrow()
    }

    /// Info boxes shrink to a single line of text when the terminal is short.
    pub fn info_box_height(&self) -> u16 {
        if self.is_short() {
            3
        } else {
            5
        }
    }
}

/// Screen regions of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub info_boxes: Rect,
    pub map: Rect,
    pub graph: Rect,
    pub table: Rect,
    pub status_bar: Rect,
}

impl DashboardLayout {
    /// ```text
    /// wide:                          narrow:
    /// ┌ header ─────────────────┐    ┌ header ─────┐
    /// │ info │ info │ info      │    │ info│info│..│
    /// │ map            │ table  │    │ map         │
    /// │ graph          │        │    │ table│graph │
    /// └ status ─────────────────┘    └ status ─────┘
    /// ```
    pub fn compute(area: Rect, ctx: &LayoutContext) -> Self {
        let [header, info_boxes, body, status_bar] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(ctx.info_box_height()),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

        let (map, graph, table) = if ctx.should_stack_panels() {
            let [map, bottom] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body);
            let [table, graph] = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(bottom);
            (map, graph, table)
        } else {
            let table_width = ctx.bounded_width(30, 32, 48);
            let [left, table] = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(table_width)])
                .areas(body);
            let [map, graph] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(left);
            (map, graph, table)
        };

        Self {
            header,
            info_boxes,
            map,
            graph,
            table,
            status_bar,
        }
    }
}

/// Centered rectangle of the given size, clipped to `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
