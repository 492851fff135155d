//! Title line with the current place and the metric tabs.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::MetricKind;
use crate::ui::theme::{metric_color, COLOR_DIM, COLOR_HEADER};
use crate::view_state::ViewState;

pub fn render(frame: &mut Frame, area: Rect, view: &ViewState) {
    let title = Line::from(vec![
        Span::styled(
            " COVID-19 Dashboard ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled("· ", Style::default().fg(COLOR_DIM)),
        Span::raw(view.stats.country_name.clone()),
    ]);
    frame.render_widget(Paragraph::new(title), area);
    frame.render_widget(
        Paragraph::new(metric_tabs(view.metric)).alignment(Alignment::Right),
        area,
    );
}

/// `1 cases │ 2 recovered │ 3 deaths`, active tab highlighted.
pub fn metric_tabs(active: MetricKind) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, metric) in MetricKind::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(COLOR_DIM)));
        }
        let style = if metric == active {
            Style::default()
                .fg(metric_color(metric))
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!("{} {}", i + 1, metric), style));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}
