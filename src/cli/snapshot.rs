//! `--snapshot`: one fetch, printed as plain text.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::api::DiseaseClient;
use crate::config::DashConfig;
use crate::error::{DashError, DashResult};
use crate::models::Selection;
use crate::selectors::{format_thousands, info_boxes};
use crate::view_state::{ApplyOutcome, ViewState};

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Rows of the country table included in the snapshot.
pub const SNAPSHOT_ROWS: usize = 10;

/// Load the country list and `selection` through the same state transitions
/// the TUI uses, and return the final state.
pub async fn load_snapshot(
    client: Arc<DiseaseClient>,
    selection: Selection,
    timeline_days: u32,
) -> DashResult<ViewState> {
    let mut state = ViewState::new();

    let list_ticket = state.begin_list_load();
    let countries = client.fetch_countries().await?;
    state.apply_country_list(list_ticket, Ok(countries));

    let ticket = state.begin_selection(selection).map_err(DashError::from)?;
    let data = client.fetch_selection(&ticket.selection, timeline_days).await?;
    if state.apply_selection(ticket, Ok(data)) != ApplyOutcome::Applied {
        tracing::warn!("snapshot selection was not applied");
    }
    Ok(state)
}

/// Plain-text rendering of the info boxes and the top of the table.
///
/// ```text
/// COVID-19 · Worldwide
/// ════════════════════════════════════════════════════════════
///   Coronavirus cases     +1.2k today    1,234,567 total
///   ...
/// ```
pub fn render_snapshot(state: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "COVID-19 · {}", state.stats.country_name);
    let _ = writeln!(out, "{}", "═".repeat(LINE_WIDTH));

    for info in info_boxes(&state.stats, state.metric) {
        let _ = writeln!(
            out,
            "  {:<20} {:>9} today  {:>15} total",
            info.title, info.today, info.total
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total cases by country");
    let _ = writeln!(out, "{}", "─".repeat(LINE_WIDTH));
    for (rank, row) in state.table_rows.iter().take(SNAPSHOT_ROWS).enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<36} {:>15}",
            rank + 1,
            row.country,
            format_thousands(row.cases)
        );
    }

    if let Some(updated) = state.last_updated {
        let _ = writeln!(out);
        let _ = writeln!(out, "Updated {}", updated.format("%Y-%m-%d %H:%M"));
    }
    out
}

/// Handle `--snapshot`: fetch, print, exit.
pub async fn handle_snapshot_command(config: &DashConfig, selection: Selection) -> DashResult<()> {
    let client = Arc::new(DiseaseClient::from_config(config)?);
    let state = load_snapshot(client, selection, config.timeline_days).await?;
    print!("{}", render_snapshot(&state));
    Ok(())
}
