use std::sync::Arc;

use provenance_core::{FilterKey, FilterState};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::commands::ListCommand;
use super::events::{FetchGeneration, ListEvent};
use super::reducer::{apply_selection, reduce, ListState};
use super::source::ListSource;
use crate::location::LocationPort;

/// Drives one mounted list view.
///
/// Commands mutate state synchronously; fetches run as Tokio tasks and report
/// back through a channel that [`tick`](Self::tick) or
/// [`settle`](Self::settle) drain. Must be used inside a Tokio runtime.
pub struct ListViewKernel<S: ListSource, L> {
    state: ListState<S::Item>,
    source: Arc<S>,
    location: L,

    next_generation: FetchGeneration,
    in_flight: usize,

    tx: mpsc::Sender<ListEvent<S::Item>>,
    rx: mpsc::Receiver<ListEvent<S::Item>>,
}

impl<S, L> ListViewKernel<S, L>
where
    S: ListSource,
    L: LocationPort,
{
    pub fn new(source: S, location: L) -> Self {
        let (tx, rx) = mpsc::channel(provenance_config::VIEW_EVENT_CAPACITY);
        Self {
            state: ListState::default(),
            source: Arc::new(source),
            location,
            next_generation: 0,
            in_flight: 0,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &ListState<S::Item> {
        &self.state
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn dispatch(&mut self, cmd: ListCommand) {
        match cmd {
            ListCommand::Mount => {
                let query = self.location.query();
                self.state.filter = FilterState::from_query(&query, S::KEYS);
                // Drop whatever the parser rejected so the address matches state.
                if self.state.filter.to_query() != query.trim_start_matches('?') {
                    self.sync_location();
                }
                self.spawn_options_fetch();
                self.spawn_results_fetch();
            }

            ListCommand::SetFreeText(text) => {
                if text != self.state.filter.free_text {
                    self.state.filter.free_text = text;
                    self.sync_location();
                }
            }

            ListCommand::Select(key, value) => {
                if !S::KEYS.contains(&key) {
                    warn!("Ignoring {:?} selection on a view without that filter", key);
                    return;
                }
                let changed = apply_selection(
                    &mut self.state.filter,
                    key,
                    value,
                    &self.state.options.mediums,
                );
                if changed {
                    self.sync_location();
                    self.spawn_results_fetch();
                }
            }

            ListCommand::ClearFilters => {
                self.state.filter = FilterState::default();
                self.sync_location();
                self.spawn_results_fetch();
            }
        }
    }

    /// Apply every event that has already arrived.
    pub fn tick(&mut self) {
        while let Ok(ev) = self.rx.try_recv() {
            self.handle(ev);
        }
    }

    /// Wait for every fetch started so far to resolve, applying each result.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.rx.recv().await {
                Some(ev) => self.handle(ev),
                None => break,
            }
        }
    }

    fn handle(&mut self, ev: ListEvent<S::Item>) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match &ev {
            ListEvent::ResultsLoaded {
                generation,
                snapshot,
                ..
            }
            | ListEvent::ResultsFailed {
                generation,
                snapshot,
                ..
            } => {
                if !self.state.is_current(*generation, snapshot) {
                    debug!(
                        "Dropping stale results (generation {}, latest {})",
                        generation, self.state.latest_generation
                    );
                    return;
                }
                if let ListEvent::ResultsFailed { message, .. } = &ev {
                    warn!("Failed to fetch results: {message}");
                }
            }
            ListEvent::OptionsLoaded(_) => {}
        }

        let revalidate = matches!(ev, ListEvent::OptionsLoaded(_));
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, ev);

        if revalidate {
            self.revalidate_medium();
        }
    }

    /// A medium taken from the address may not belong to the art type once
    /// the real option lists are known.
    fn revalidate_medium(&mut self) {
        if !S::KEYS.contains(&FilterKey::Medium) {
            return;
        }
        let current = self.state.filter.get(FilterKey::Medium);
        let changed = apply_selection(
            &mut self.state.filter,
            FilterKey::Medium,
            current,
            &self.state.options.mediums,
        );
        if changed {
            debug!("Cleared medium {:?} not offered for the selected art type", current);
            self.sync_location();
            self.spawn_results_fetch();
        }
    }

    fn sync_location(&self) {
        self.location.replace_query(&self.state.filter.to_query());
    }

    fn spawn_options_fetch(&mut self) {
        let source = self.source.clone();
        let tx = self.tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let options = source.fetch_options().await;
            let _ = tx.send(ListEvent::OptionsLoaded(options)).await;
        });
    }

    fn spawn_results_fetch(&mut self) {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.state.latest_generation = generation;
        self.state.loading = true;

        let filter = self.state.filter.clone();
        let source = self.source.clone();
        let tx = self.tx.clone();
        self.in_flight += 1;
        tokio::spawn(async move {
            let snapshot = filter.categorical.clone();
            let ev = match source.fetch_results(&filter).await {
                Ok(items) => ListEvent::ResultsLoaded {
                    generation,
                    snapshot,
                    items,
                },
                Err(e) => ListEvent::ResultsFailed {
                    generation,
                    snapshot,
                    message: e.to_string(),
                },
            };
            let _ = tx.send(ev).await;
        });
    }
}
