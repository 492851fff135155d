//! View state: the data the dashboard renders, decoupled from `App`.
//!
//! ```text
//!   fetch task ──AppMessage──▶ App ──apply_*──▶ ViewState
//!                                                   │ view_state()
//!                                                   ▼
//!                                             AppViewState ──▶ ui::render
//! ```
//!
//! - [`ViewState`]: selection, stats, viewport, metric, graph, table
//! - [`SelectionTicket`] / [`ListTicket`]: generation-tagged requests
//! - [`PickerState`]: the country picker overlay
//! - [`ScrollState`]: table scroll position

mod app_view;
pub mod dashboard_state;
pub mod fetch;
pub mod picker;
mod scroll_state;

pub use app_view::AppViewState;
pub use dashboard_state::{SelectionPayload, ViewState};
pub use fetch::{ApplyOutcome, FetchStatus, ListTicket, SelectionTicket};
pub use picker::{PickerEntry, PickerState, MAX_VISIBLE_ROWS};
pub use scroll_state::{ScrollState, PAGE_ROWS};
