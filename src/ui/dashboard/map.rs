//! World map with one circle per country, sized by the active metric.

use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Map, MapResolution, Points},
        Block, BorderType,
    },
    Frame,
};

use crate::models::Selection;
use crate::selectors::map_markers;
use crate::ui::theme::{metric_color, COLOR_BORDER, COLOR_LAND, COLOR_SELECTED};
use crate::view_state::ViewState;

pub fn render(frame: &mut Frame, area: Rect, view: &ViewState) {
    let (x_bounds, y_bounds) = view.viewport.bounds();
    let markers = map_markers(&view.countries, view.metric);
    let color = metric_color(view.metric);
    let selected = match view.selection {
        Selection::Country(_) => Some((view.viewport.center.lng, view.viewport.center.lat)),
        Selection::Global => None,
    };

    let title = format!(
        " Map · {} · zoom {} ",
        view.stats.country_name, view.viewport.zoom
    );

    let canvas = Canvas::default()
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(title),
        )
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: COLOR_LAND,
                resolution: MapResolution::High,
            });
            ctx.layer();
            for marker in &markers {
                ctx.draw(&Circle {
                    x: marker.long,
                    y: marker.lat,
                    radius: marker.radius,
                    color,
                });
            }
            if let Some(point) = selected {
                ctx.layer();
                ctx.draw(&Points {
                    coords: &[point],
                    color: COLOR_SELECTED,
                });
            }
        });

    frame.render_widget(canvas, area);
}
