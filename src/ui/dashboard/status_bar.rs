//! Bottom line: fetch status on the left, key hints on the right.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::{spinner, COLOR_DIM, COLOR_ERROR, COLOR_LOADING};
use crate::view_state::{FetchStatus, ViewState};

const KEY_HINTS: &str = "/ country  g world  1-3 metric  r reload  ? help  q quit ";

pub fn render(frame: &mut Frame, area: Rect, view: &ViewState, tick: u64) {
    frame.render_widget(Paragraph::new(status_line(view, tick)), area);
    if area.width as usize > KEY_HINTS.len() + 40 {
        frame.render_widget(
            Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM)))
                .alignment(Alignment::Right),
            area,
        );
    }
}

/// Selection errors win over list errors; loading wins over "updated".
/// A rejected selection is shown alongside an in-flight fetch.
pub fn status_line(view: &ViewState, tick: u64) -> Line<'static> {
    if let FetchStatus::Failed { message } = &view.fetch_status {
        return error_line(message);
    }
    if view.fetch_status.is_loading() {
        let what = view
            .pending
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "data".to_string());
        let mut line = loading_line(&format!("loading {}", what), tick);
        if let Some(rejection) = &view.rejection {
            line.spans.extend(error_line(rejection).spans);
        }
        return line;
    }
    if let Some(rejection) = &view.rejection {
        return error_line(rejection);
    }
    if let FetchStatus::Failed { message } = &view.list_status {
        return error_line(message);
    }
    if view.list_status.is_loading() {
        return loading_line("loading countries", tick);
    }

    match view.last_updated {
        Some(at) => Line::from(Span::styled(
            format!(" Updated {}", at.format("%H:%M:%S")),
            Style::default().fg(COLOR_DIM),
        )),
        None => Line::from(Span::styled(" Ready", Style::default().fg(COLOR_DIM))),
    }
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" ✗ {}", message),
        Style::default().fg(COLOR_ERROR),
    ))
}

fn loading_line(text: &str, tick: u64) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {} {}…", spinner(tick), text),
        Style::default().fg(COLOR_LOADING),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IsoCode, Selection};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_idle_status() {
        assert_eq!(text(&status_line(&ViewState::new(), 0)), " Ready");
    }

    #[test]
    fn test_loading_shows_pending_selection() {
        let mut view = ViewState::new();
        view.fetch_status = FetchStatus::Loading;
        view.pending = Some(Selection::Country(IsoCode::parse("PE").unwrap()));
        assert_eq!(text(&status_line(&view, 0)), " ⠋ loading PE…");
    }

    #[test]
    fn test_selection_error_wins() {
        let mut view = ViewState::new();
        view.list_status = FetchStatus::Loading;
        view.fetch_status = FetchStatus::Failed {
            message: "PE: timed out".to_string(),
        };
        assert_eq!(text(&status_line(&view, 3)), " ✗ PE: timed out");
    }

    #[test]
    fn test_rejection_keeps_spinner() {
        let mut view = ViewState::new();
        view.fetch_status = FetchStatus::Loading;
        view.pending = Some(Selection::Country(IsoCode::parse("PE").unwrap()));
        view.rejection = Some("unknown country 'ZZ'".to_string());
        assert_eq!(
            text(&status_line(&view, 0)),
            " ⠋ loading PE… ✗ unknown country 'ZZ'"
        );

        view.fetch_status = FetchStatus::Idle;
        view.pending = None;
        assert_eq!(text(&status_line(&view, 0)), " ✗ unknown country 'ZZ'");
    }
}
