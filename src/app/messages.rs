//! AppMessage enum for async communication within the application.

use crate::api::SelectionData;
use crate::error::DashResult;
use crate::models::CountrySummary;
use crate::view_state::{ListTicket, SelectionTicket};

/// Results sent back by fetch tasks.
#[derive(Debug)]
pub enum AppMessage {
    /// The country list request finished
    CountriesLoaded {
        ticket: ListTicket,
        result: DashResult<Vec<CountrySummary>>,
    },
    /// A selection request finished
    SelectionLoaded {
        ticket: SelectionTicket,
        result: DashResult<SelectionData>,
    },
}
