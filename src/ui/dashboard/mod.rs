//! Dashboard widgets. Each `render` takes the area it owns and borrows the view.

pub mod graph;
pub mod header;
pub mod help;
pub mod info_boxes;
pub mod map;
pub mod picker;
pub mod status_bar;
pub mod table;
