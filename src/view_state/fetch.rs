//! Fetch bookkeeping: tickets, outcomes and the status shown in the status bar.

use crate::models::Selection;

/// State of the most recent request of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Failed { message: String },
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchStatus::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Issued by `begin_selection`, handed back with the fetch result.
///
/// Only the ticket carrying the latest generation may be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    pub generation: u64,
    pub selection: Selection,
}

/// Same as [`SelectionTicket`] for the country list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTicket {
    pub generation: u64,
}

/// What happened to a fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer request was issued; the result was dropped.
    Stale,
    /// The fetch failed; previous data kept.
    Failed,
}
