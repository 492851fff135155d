//! The three summary boxes: cases, recovered, deaths.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use crate::selectors::{info_boxes, InfoBox};
use crate::ui::theme::{metric_color, COLOR_BORDER, COLOR_DIM};
use crate::view_state::ViewState;

pub fn render(frame: &mut Frame, area: Rect, view: &ViewState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (info, column) in info_boxes(&view.stats, view.metric).iter().zip(columns.iter()) {
        render_box(frame, *column, info);
    }
}

fn render_box(frame: &mut Frame, area: Rect, info: &InfoBox) {
    let color = metric_color(info.metric);
    let (border_style, border_type) = if info.active {
        (Style::default().fg(color), BorderType::Thick)
    } else {
        (Style::default().fg(COLOR_BORDER), BorderType::Rounded)
    };

    let block = Block::bordered()
        .border_type(border_type)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", info.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));

    let today = Span::styled(
        info.today.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    );
    let total = Span::styled(format!("{} Total", info.total), Style::default().fg(COLOR_DIM));

    // Short boxes have one inner row
    let lines = if area.height <= 3 {
        vec![Line::from(vec![today, Span::raw("  "), total])]
    } else {
        vec![Line::from(today), Line::default(), Line::from(total)]
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
