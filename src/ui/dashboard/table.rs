//! "Total cases by country" table.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::MetricKind;
use crate::selectors::format_thousands;
use crate::ui::helpers::truncate_to_width;
use crate::ui::theme::{metric_color, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};
use crate::view_state::{FetchStatus, ViewState};

/// Borders plus the header row.
const TABLE_CHROME: u16 = 3;

const CASES_WIDTH: u16 = 13;

pub fn render(frame: &mut Frame, area: Rect, view: &ViewState) {
    let total = view.table_rows.len();
    let visible = area.height.saturating_sub(TABLE_CHROME) as usize;
    let offset = view.table_scroll.effective_offset(total, visible);

    let title = if total > visible && visible > 0 {
        format!(
            " Total cases by country {}-{}/{} ",
            offset + 1,
            (offset + visible).min(total),
            total
        )
    } else {
        " Total cases by country ".to_string()
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(title);

    if total == 0 {
        let message = match &view.list_status {
            FetchStatus::Failed { message } => Span::styled(message.clone(), Style::default().fg(COLOR_ERROR)),
            FetchStatus::Loading => Span::styled("Loading countries…", Style::default().fg(COLOR_DIM)),
            FetchStatus::Idle => Span::styled("No countries", Style::default().fg(COLOR_DIM)),
        };
        frame.render_widget(
            Paragraph::new(message).alignment(Alignment::Center).block(block),
            area,
        );
        return;
    }

    let highlight = Style::default()
        .fg(metric_color(MetricKind::Cases))
        .add_modifier(Modifier::BOLD);

    // Borders plus the column gap
    let name_width = area.width.saturating_sub(CASES_WIDTH + 3) as usize;
    let rows = view.table_rows.iter().skip(offset).take(visible).map(|row| {
        let style = if row.country == view.stats.country_name {
            highlight
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(truncate_to_width(&row.country, name_width)),
            Cell::from(Line::from(format_thousands(row.cases)).alignment(Alignment::Right)),
        ])
        .style(style)
    });

    let header = Row::new(vec![
        Cell::from("Country"),
        Cell::from(Line::from("Cases").alignment(Alignment::Right)),
    ])
    .style(Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD));

    let table = Table::new(rows, [Constraint::Min(10), Constraint::Length(CASES_WIDTH)])
        .header(header)
        .block(block);
    frame.render_widget(table, area);
}
