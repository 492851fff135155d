//! Line graph of the daily increase for the active metric.

use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, BorderType, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::models::{MetricKind, Timeline};
use crate::selectors::{daily_series, format_count};
use crate::ui::theme::{metric_color, COLOR_BORDER, COLOR_DIM};
use crate::view_state::ViewState;

const DATE_LABEL: &str = "%b %d";

pub fn render(frame: &mut Frame, area: Rect, view: &ViewState) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} · daily ", view.graph_target.title(view.metric)));

    let Some(timeline) = view.timeline.as_ref() else {
        frame.render_widget(placeholder("No history available", block), area);
        return;
    };

    let series = daily_series(timeline, view.metric);
    if series.is_empty() {
        frame.render_widget(placeholder("No history available", block), area);
        return;
    }

    let color = metric_color(view.metric);
    let x_max = (series.len().saturating_sub(1)).max(1) as f64;
    let y_max = series.iter().map(|(_, y)| *y).fold(0.0, f64::max).max(1.0);

    let dataset = Dataset::default()
        .name(view.metric.as_str())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&series);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(COLOR_DIM))
                .bounds([0.0, x_max])
                .labels(date_labels(timeline, view.metric)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(COLOR_DIM))
                .bounds([0.0, y_max * 1.1])
                .labels(vec![
                    "0".to_string(),
                    axis_count(y_max / 2.0),
                    axis_count(y_max),
                ]),
        );

    frame.render_widget(chart, area);
}

fn placeholder<'a>(message: &'a str, block: Block<'a>) -> Paragraph<'a> {
    Paragraph::new(Span::styled(
        message,
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .block(block)
}

/// First and last date of the delta series (the first raw point has no delta).
fn date_labels(timeline: &Timeline, metric: MetricKind) -> Vec<String> {
    let points = timeline.series(metric);
    let first: Option<NaiveDate> = points.get(1).map(|p| p.date);
    let last: Option<NaiveDate> = points.last().map(|p| p.date);
    match (first, last) {
        (Some(first), Some(last)) => vec![
            first.format(DATE_LABEL).to_string(),
            last.format(DATE_LABEL).to_string(),
        ],
        _ => Vec::new(),
    }
}

fn axis_count(value: f64) -> String {
    format_count(Some(value.round() as i64))
        .trim_start_matches('+')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyPoint;

    #[test]
    fn test_date_labels_skip_first_point() {
        let day = |d: u32| DailyPoint {
            date: NaiveDate::from_ymd_opt(2021, 3, d).unwrap(),
            value: d as i64,
        };
        let timeline = Timeline {
            cases: vec![day(1), day(2), day(9)],
            ..Default::default()
        };
        assert_eq!(date_labels(&timeline, MetricKind::Cases), vec!["Mar 02", "Mar 09"]);
        assert!(date_labels(&timeline, MetricKind::Deaths).is_empty());
    }

    #[test]
    fn test_axis_count() {
        assert_eq!(axis_count(1234.0), "1.2k");
        assert_eq!(axis_count(0.4), "0");
    }
}
