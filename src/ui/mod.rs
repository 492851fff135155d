//! Terminal rendering.
//!
//! Rendering is a pure function of [`AppViewState`]: the UI never sees `App`.
//! Layout adapts to the terminal size through [`LayoutContext`].

pub mod components;
pub mod dashboard;
pub mod helpers;
pub mod layout;
pub mod theme;

pub use layout::{DashboardLayout, LayoutContext};

use ratatui::Frame;

use crate::view_state::AppViewState;

/// Draw one frame.
pub fn render(frame: &mut Frame, view: &AppViewState) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);
    let layout = DashboardLayout::compute(area, &ctx);
    let state = view.view;

    dashboard::header::render(frame, layout.header, state);
    dashboard::info_boxes::render(frame, layout.info_boxes, state);
    dashboard::map::render(frame, layout.map, state);
    dashboard::graph::render(frame, layout.graph, state);
    dashboard::table::render(frame, layout.table, state);
    dashboard::status_bar::render(frame, layout.status_bar, state, view.tick_count);

    if view.picker.visible {
        dashboard::picker::render(frame, area, view.picker);
    } else if view.show_help {
        dashboard::help::render(frame, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SelectionData;
    use crate::models::{CountrySummary, DailyPoint, IsoCode, Timeline};
    use crate::view_state::{PickerState, ViewState};
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn summary(name: &str, iso: &str, cases: i64) -> CountrySummary {
        CountrySummary {
            name: name.to_string(),
            iso_code: Some(IsoCode::parse(iso).unwrap()),
            lat: -10.0,
            long: -76.0,
            cases,
            today_cases: 12,
            recovered: cases / 2,
            today_recovered: 3,
            deaths: cases / 10,
            today_deaths: 1,
        }
    }

    fn timeline() -> Timeline {
        let points = |base: i64| {
            (1..=5)
                .map(|day| DailyPoint {
                    date: NaiveDate::from_ymd_opt(2021, 3, day).unwrap(),
                    value: base * i64::from(day),
                })
                .collect::<Vec<_>>()
        };
        Timeline {
            cases: points(1000),
            deaths: points(10),
            recovered: points(500),
        }
    }

    fn loaded_state() -> ViewState {
        let mut state = ViewState::new();
        let list = state.begin_list_load();
        state.apply_country_list(
            list,
            Ok(vec![summary("Peru", "PE", 500), summary("Chile", "CL", 900)]),
        );
        let ticket = state.begin_selection(crate::models::Selection::Global).unwrap();
        state.apply_selection(ticket, Ok(SelectionData::Global(timeline())));
        state
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn draw(width: u16, height: u16, view: &AppViewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, view)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_dashboard_panels() {
        let state = loaded_state();
        let picker = PickerState::new();
        let text = draw(140, 45, &AppViewState::new(&state, &picker));

        assert!(text.contains("Total cases by country"));
        assert!(text.contains("Chile"));
        assert!(text.contains("Worldwide"));
        assert!(text.contains("Updated"));
    }

    #[test]
    fn test_renders_in_tiny_terminal() {
        let state = loaded_state();
        let picker = PickerState::new();
        draw(20, 6, &AppViewState::new(&state, &picker));
        draw(1, 1, &AppViewState::new(&state, &picker));
    }

    #[test]
    fn test_picker_overlay() {
        let state = loaded_state();
        let mut picker = PickerState::new();
        picker.open(&state.options);
        let text = draw(100, 40, &AppViewState::new(&state, &picker));

        assert!(text.contains("Select country"));
        assert!(text.contains("Filter:"));
    }

    #[test]
    fn test_help_overlay() {
        let state = ViewState::new();
        let picker = PickerState::new();
        let text = draw(100, 40, &AppViewState::new(&state, &picker).with_help(true));
        assert!(text.contains("Keys"));
    }
}
