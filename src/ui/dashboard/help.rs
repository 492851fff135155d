//! Key help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::input::DASHBOARD_BINDINGS;
use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::COLOR_ACCENT;

pub fn render(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = DASHBOARD_BINDINGS
        .iter()
        .map(|(combo, cmd)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>10}  ", combo.label()),
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                ),
                Span::raw(cmd.description()),
            ])
        })
        .collect();

    let ctx = LayoutContext::from_rect(area);
    let config = DialogFrameConfig::new("Keys", lines.len() as u16).max_width(44);
    let inner = render_dialog_frame(frame, area, &ctx, &config);
    frame.render_widget(Paragraph::new(lines), inner);
}
