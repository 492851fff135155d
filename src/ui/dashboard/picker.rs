//! Country picker overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::{render_dialog_frame, DialogFrameConfig};
use crate::ui::helpers::truncate_to_width;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::view_state::{PickerState, MAX_VISIBLE_ROWS};

/// Room for the label inside the widest dialog, next to marker and code.
const LABEL_WIDTH: usize = 38;

pub fn render(frame: &mut Frame, area: Rect, picker: &PickerState) {
    if !picker.visible {
        return;
    }

    let ctx = LayoutContext::from_rect(area);
    let list_rows = picker.entries.len().clamp(1, MAX_VISIBLE_ROWS) as u16;
    let config = DialogFrameConfig::new("Select country", list_rows + 2).max_width(50);
    let inner = render_dialog_frame(frame, area, &ctx, &config);

    frame.render_widget(Paragraph::new(picker_lines(picker)), inner);
}

pub fn picker_lines(picker: &PickerState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(COLOR_DIM)),
            Span::raw(picker.query.clone()),
            Span::styled("▏", Style::default().fg(COLOR_ACCENT)),
        ]),
        Line::default(),
    ];

    if picker.entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "No matching countries",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        )));
        return lines;
    }

    for (index, entry) in picker.visible_entries() {
        let selected = index == picker.selected_index;
        let marker = if selected { "▶ " } else { "  " };
        let style = if selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        let label = truncate_to_width(&entry.label, LABEL_WIDTH);
        let mut spans = vec![Span::styled(format!("{}{}", marker, label), style)];
        if let Some(code) = &entry.code {
            spans.push(Span::styled(format!("  {}", code), Style::default().fg(COLOR_DIM)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CountryOption, IsoCode};

    #[test]
    fn test_lines_mark_selection() {
        let options = vec![CountryOption {
            name: "Peru".to_string(),
            iso_code: IsoCode::parse("PE").unwrap(),
        }];
        let mut picker = PickerState::new();
        picker.open(&options);
        picker.move_down();

        let lines = picker_lines(&picker);
        let texts: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(texts[2], "  Worldwide");
        assert_eq!(texts[3], "▶ Peru  PE");
    }

    #[test]
    fn test_empty_filter_message() {
        let mut picker = PickerState::new();
        picker.open(&[]);
        picker.push_char('x', &[]);
        let lines = picker_lines(&picker);
        assert_eq!(lines.len(), 3);
    }
}
