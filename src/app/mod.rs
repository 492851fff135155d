//! Application state and fetch orchestration.
//!
//! `App` owns the [`ViewState`] and spawns one tokio task per request. Each
//! task sends its result back over `message_tx`; the main loop feeds it to
//! [`App::handle_message`], which applies it only if no newer request of the
//! same kind was issued meanwhile.

mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::DiseaseClient;
use crate::config::DashConfig;
use crate::error::{DashResult, SelectionError};
use crate::models::{MetricKind, Selection};
use crate::view_state::{AppViewState, PickerState, ViewState};

/// Main application state
pub struct App {
    /// Everything the dashboard shows
    pub state: ViewState,
    /// Country picker overlay
    pub picker: PickerState,
    /// Shared API client, cloned into every fetch task
    pub client: Arc<DiseaseClient>,
    /// History length requested for the graph
    pub timeline_days: u32,
    /// Receiver for fetch results (taken by the main loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for fetch results (clone this into async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub should_quit: bool,
    /// Dirty flag: set on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Key help overlay visible
    pub show_help: bool,
    selection_task: Option<JoinHandle<()>>,
    list_task: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(client: Arc<DiseaseClient>, timeline_days: u32) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            state: ViewState::new(),
            picker: PickerState::new(),
            client,
            timeline_days,
            message_rx: Some(message_rx),
            message_tx,
            should_quit: false,
            needs_redraw: true, // Start with redraw needed
            tick_count: 0,
            show_help: false,
            selection_task: None,
            list_task: None,
        }
    }

    pub fn from_config(config: &DashConfig) -> DashResult<Self> {
        let client = DiseaseClient::from_config(config)?;
        Ok(Self::new(Arc::new(client), config.timeline_days))
    }

    /// Kick off the initial loads: the country list and the worldwide view.
    pub fn initialize(&mut self) {
        self.load_countries();
        if let Err(err) = self.select(Selection::Global) {
            tracing::warn!(error = %err, "initial selection rejected");
        }
    }

    /// Fetch the country list, superseding any load in flight.
    pub fn load_countries(&mut self) {
        let ticket = self.state.begin_list_load();
        if let Some(handle) = self.list_task.take() {
            handle.abort();
        }

        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        self.list_task = Some(tokio::spawn(async move {
            let result = client.fetch_countries().await;
            let _ = tx.send(AppMessage::CountriesLoaded { ticket, result });
        }));
        self.mark_dirty();
    }

    /// Request a new selection.
    ///
    /// An unknown country is rejected here and no request is made. Otherwise
    /// the previous selection request, if still running, is aborted.
    pub fn select(&mut self, selection: Selection) -> Result<(), SelectionError> {
        let result = self.state.begin_selection(selection);
        self.mark_dirty();
        let ticket = result?;

        if let Some(handle) = self.selection_task.take() {
            handle.abort();
        }

        tracing::debug!(selection = %ticket.selection, generation = ticket.generation, "selection requested");
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();
        let days = self.timeline_days;
        self.selection_task = Some(tokio::spawn(async move {
            let result = client.fetch_selection(&ticket.selection, days).await;
            let _ = tx.send(AppMessage::SelectionLoaded { ticket, result });
        }));
        Ok(())
    }

    /// Reload the country list and re-issue the current selection.
    pub fn reload(&mut self) {
        tracing::info!(selection = %self.state.selection, "reload");
        self.load_countries();
        let current = self.state.selection.clone();
        if let Err(err) = self.select(current) {
            tracing::warn!(error = %err, "reload selection rejected");
        }
    }

    pub fn set_metric(&mut self, metric: MetricKind) {
        self.state.set_metric(metric);
        self.mark_dirty();
    }

    pub fn cycle_metric(&mut self, forward: bool) {
        self.state.cycle_metric(forward);
        self.mark_dirty();
    }

    /// Advance the animation tick; redraw only while something is loading.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.state.is_loading() {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
        for handle in [self.selection_task.take(), self.list_task.take()].into_iter().flatten() {
            handle.abort();
        }
    }

    /// Borrowed snapshot for `ui::render`.
    pub fn view_state(&self) -> AppViewState<'_> {
        AppViewState::new(&self.state, &self.picker)
            .with_tick(self.tick_count)
            .with_help(self.show_help)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::models::IsoCode;
    use crate::view_state::FetchStatus;

    fn app() -> (App, MockHttpClient) {
        let mock = MockHttpClient::new();
        let client = DiseaseClient::new(Arc::new(mock.clone()), "http://api.test");
        (App::new(Arc::new(client), 30), mock)
    }

    #[tokio::test]
    async fn test_unknown_country_makes_no_request() {
        let (mut app, mock) = app();
        let result = app.select(Selection::Country(IsoCode::parse("ZZ").unwrap()));

        assert_eq!(result, Err(SelectionError::UnknownCountry("ZZ".to_string())));
        assert!(mock.get_requests().is_empty());
        assert_eq!(app.state.fetch_status, FetchStatus::Idle);
        assert!(app.state.rejection.is_some());
        assert!(app.needs_redraw);
    }

    #[tokio::test]
    async fn test_rejected_country_keeps_spinner_running() {
        let (mut app, _mock) = app();
        app.select(Selection::Global).unwrap();
        assert!(app.select(Selection::Country(IsoCode::parse("ZZ").unwrap())).is_err());

        app.needs_redraw = false;
        app.tick();
        assert!(app.needs_redraw);
        assert_eq!(app.state.pending, Some(Selection::Global));
    }

    #[tokio::test]
    async fn test_metric_change_marks_dirty_only() {
        let (mut app, mock) = app();
        app.needs_redraw = false;
        app.set_metric(MetricKind::Deaths);

        assert!(app.needs_redraw);
        assert_eq!(app.state.metric, MetricKind::Deaths);
        assert!(mock.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_tick_redraws_only_while_loading() {
        let (mut app, _mock) = app();
        app.needs_redraw = false;
        app.tick();
        assert!(!app.needs_redraw);

        app.state.begin_list_load();
        app.tick();
        assert!(app.needs_redraw);
        assert_eq!(app.tick_count, 2);
    }

    #[tokio::test]
    async fn test_quit() {
        let (mut app, _mock) = app();
        app.quit();
        assert!(app.should_quit);
    }
}
