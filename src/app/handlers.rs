//! Message handlers for App.

use super::{App, AppMessage};
use crate::view_state::ApplyOutcome;

impl App {
    /// Apply a fetch result. Stale results are dropped without a redraw.
    pub fn handle_message(&mut self, msg: AppMessage) -> ApplyOutcome {
        let outcome = match msg {
            AppMessage::CountriesLoaded { ticket, result } => {
                let outcome = self.state.apply_country_list(ticket, result);
                if outcome == ApplyOutcome::Applied {
                    tracing::info!(countries = self.state.countries.len(), "country list applied");
                    if self.picker.visible {
                        self.picker.refresh(&self.state.options);
                    }
                }
                outcome
            }
            AppMessage::SelectionLoaded { ticket, result } => {
                let selection = ticket.selection.clone();
                let outcome = self.state.apply_selection(ticket, result);
                if outcome == ApplyOutcome::Applied {
                    tracing::info!(%selection, "selection applied");
                }
                outcome
            }
        };

        if outcome != ApplyOutcome::Stale {
            self.mark_dirty();
        }
        outcome
    }
}
