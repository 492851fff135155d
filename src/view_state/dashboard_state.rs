//! The authoritative dashboard state.
//!
//! All mutation goes through `begin_*`/`apply_*` pairs so that a response
//! can only land if no newer request was issued in the meantime.

use chrono::{DateTime, Local};

use super::fetch::{ApplyOutcome, FetchStatus, ListTicket, SelectionTicket};
use super::scroll_state::ScrollState;
use crate::api::SelectionData;
use crate::error::{DashResult, SelectionError};
use crate::models::{
    CountryOption, CountryStats, CountrySummary, GraphTarget, MapViewport, MetricKind, Selection,
    TableRow, Timeline,
};
use crate::selectors;

/// Everything a resolved selection replaces, in one piece.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionPayload {
    pub stats: CountryStats,
    pub viewport: MapViewport,
    pub graph_target: GraphTarget,
    pub timeline: Option<Timeline>,
}

impl From<SelectionData> for SelectionPayload {
    fn from(data: SelectionData) -> Self {
        match data {
            SelectionData::Global(timeline) => Self {
                stats: CountryStats::from_timeline(&timeline),
                viewport: MapViewport::global(),
                graph_target: GraphTarget::Global,
                timeline: Some(timeline),
            },
            SelectionData::Country { summary, timeline } => Self {
                stats: CountryStats::from_summary(&summary),
                viewport: MapViewport::country(summary.lat, summary.long),
                graph_target: GraphTarget::Country(summary.name),
                timeline,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// The selection currently on screen.
    pub selection: Selection,
    pub stats: CountryStats,
    pub viewport: MapViewport,
    pub metric: MetricKind,
    pub graph_target: GraphTarget,
    pub timeline: Option<Timeline>,

    pub countries: Vec<CountrySummary>,
    pub options: Vec<CountryOption>,
    pub table_rows: Vec<TableRow>,
    pub table_scroll: ScrollState,

    pub fetch_status: FetchStatus,
    pub list_status: FetchStatus,
    /// Selection waiting for its response, shown as "loading X".
    pub pending: Option<Selection>,
    /// Last rejected selection. Cleared by the next accepted one or by a response.
    pub rejection: Option<String>,
    pub last_updated: Option<DateTime<Local>>,

    generation: u64,
    list_generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn list_generation(&self) -> u64 {
        self.list_generation
    }

    /// `Global` is always valid; a country must be in the loaded options.
    pub fn validate_selection(&self, selection: &Selection) -> Result<(), SelectionError> {
        match selection {
            Selection::Global => Ok(()),
            Selection::Country(code) => {
                if self.options.iter().any(|o| &o.iso_code == code) {
                    Ok(())
                } else {
                    Err(SelectionError::UnknownCountry(code.to_string()))
                }
            }
        }
    }

    /// Validate and register a new selection request.
    ///
    /// Any ticket handed out earlier becomes stale. A rejected selection leaves
    /// the in-flight request and its status alone.
    pub fn begin_selection(&mut self, selection: Selection) -> Result<SelectionTicket, SelectionError> {
        if let Err(err) = self.validate_selection(&selection) {
            self.rejection = Some(err.to_string());
            return Err(err);
        }

        self.rejection = None;
        self.generation += 1;
        self.fetch_status = FetchStatus::Loading;
        self.pending = Some(selection.clone());
        Ok(SelectionTicket {
            generation: self.generation,
            selection,
        })
    }

    pub fn is_current(&self, ticket: &SelectionTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a resolved selection fetch.
    pub fn apply_selection(
        &mut self,
        ticket: SelectionTicket,
        result: DashResult<SelectionData>,
    ) -> ApplyOutcome {
        if !self.is_current(&ticket) {
            tracing::debug!(
                selection = %ticket.selection,
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale selection result"
            );
            return ApplyOutcome::Stale;
        }

        self.pending = None;
        self.rejection = None;
        match result {
            Ok(data) => {
                let payload = SelectionPayload::from(data);
                self.selection = ticket.selection;
                self.stats = payload.stats;
                self.viewport = payload.viewport;
                self.graph_target = payload.graph_target;
                self.timeline = payload.timeline;
                self.fetch_status = FetchStatus::Idle;
                self.last_updated = Some(Local::now());
                ApplyOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(selection = %ticket.selection, error = %err, code = err.error_code(), "selection fetch failed");
                self.fetch_status = FetchStatus::Failed {
                    message: format!("{}: {}", ticket.selection, err.user_message()),
                };
                ApplyOutcome::Failed
            }
        }
    }

    pub fn begin_list_load(&mut self) -> ListTicket {
        self.list_generation += 1;
        self.list_status = FetchStatus::Loading;
        ListTicket {
            generation: self.list_generation,
        }
    }

    /// Apply a resolved country list. Options and table rows are derived here, once.
    pub fn apply_country_list(
        &mut self,
        ticket: ListTicket,
        result: DashResult<Vec<CountrySummary>>,
    ) -> ApplyOutcome {
        if ticket.generation != self.list_generation {
            tracing::debug!(generation = ticket.generation, latest = self.list_generation, "discarding stale country list");
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(countries) => {
                self.options = selectors::country_options(&countries);
                self.table_rows = selectors::table_rows(&countries);
                self.countries = countries;
                self.table_scroll.clamp(self.table_rows.len());
                self.list_status = FetchStatus::Idle;
                ApplyOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(error = %err, code = err.error_code(), "country list fetch failed");
                self.list_status = FetchStatus::Failed {
                    message: format!("country list: {}", err.user_message()),
                };
                ApplyOutcome::Failed
            }
        }
    }

    /// Local change, no fetch.
    pub fn set_metric(&mut self, metric: MetricKind) {
        self.metric = metric;
    }

    pub fn cycle_metric(&mut self, forward: bool) {
        self.metric = if forward { self.metric.next() } else { self.metric.prev() };
    }

    pub fn scroll_table(&mut self, delta: isize) {
        self.table_scroll.scroll_by(delta, self.table_rows.len());
    }

    pub fn is_loading(&self) -> bool {
        self.fetch_status.is_loading() || self.list_status.is_loading()
    }
}
