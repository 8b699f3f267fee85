// src/search/orchestrator.rs
use crate::config::SearchConfig;
use crate::domain::generator::generate;
use crate::domain::{apply_filters, FilterSettings, Listing};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Lifecycle of the most recent search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    InFlight,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Completed(Vec<Listing>),
    /// A newer search started while this one was waiting; its results were dropped.
    Superseded,
}

#[derive(Debug)]
struct SearchState {
    phase: SearchPhase,
    last_query: String,
    last_results: Vec<Listing>,
}

/// Sequences generation and filtering for one query at a time.
///
/// Each call takes a ticket from a monotonic counter. Only the holder of the
/// newest ticket may publish results, so a slow earlier search can never
/// overwrite a later one.
#[derive(Debug)]
pub struct SearchOrchestrator {
    cfg: SearchConfig,
    filters: Arc<Mutex<FilterSettings>>,
    seq: AtomicU64,
    state: Mutex<SearchState>,
}

impl SearchOrchestrator {
    pub fn new(cfg: SearchConfig, filters: Arc<Mutex<FilterSettings>>) -> Self {
        Self {
            cfg,
            filters,
            seq: AtomicU64::new(0),
            state: Mutex::new(SearchState {
                phase: SearchPhase::Idle,
                last_query: String::new(),
                last_results: Vec::new(),
            }),
        }
    }

    /// Blocks for the configured latency, then generates and filters.
    /// Filter settings are read after the wait, so the newest values apply.
    pub fn search(&self, query: &str) -> SearchOutcome {
        let query = query.trim();

        // Ticket and last query are taken under one lock so they always agree.
        let ticket = {
            let mut state = self.lock_state();
            state.phase = SearchPhase::InFlight;
            state.last_query = query.to_string();
            self.seq.fetch_add(1, Ordering::SeqCst) + 1
        };
        tracing::debug!(ticket, %query, "search started");

        if self.cfg.latency_ms > 0 {
            std::thread::sleep(Duration::from_millis(self.cfg.latency_ms));
        }

        let generated = generate(query, self.cfg.result_count, &self.cfg.default_location);
        let settings = self.current_filters();
        let results = apply_filters(&generated, &settings);

        let mut state = self.lock_state();
        if self.seq.load(Ordering::SeqCst) != ticket {
            tracing::debug!(ticket, %query, "search superseded, dropping results");
            return SearchOutcome::Superseded;
        }
        state.phase = SearchPhase::Completed;
        state.last_results = results.clone();

        tracing::info!(
            ticket,
            %query,
            generated = generated.len(),
            shown = results.len(),
            max_price = settings.max_price,
            min_stars = settings.min_stars,
            "search completed"
        );
        SearchOutcome::Completed(results)
    }

    /// Re-run the last query, e.g. after a filter control changed.
    pub fn rerun(&self) -> SearchOutcome {
        let query = self.last_query();
        self.search(&query)
    }

    pub fn phase(&self) -> SearchPhase {
        self.lock_state().phase
    }

    pub fn last_query(&self) -> String {
        self.lock_state().last_query.clone()
    }

    pub fn last_results(&self) -> Vec<Listing> {
        self.lock_state().last_results.clone()
    }

    /// Look a listing up in the last published results.
    pub fn find(&self, id: &str) -> Option<Listing> {
        self.lock_state()
            .last_results
            .iter()
            .find(|it| it.id == id)
            .cloned()
    }

    pub fn current_filters(&self) -> FilterSettings {
        *self.filters.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn lock_state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(|p| p.into_inner())
    }
}
