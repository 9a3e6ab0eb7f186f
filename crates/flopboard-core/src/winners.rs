//! Sync controller for the dynamic winners list.
//!
//! Owns the fetch lifecycle: which user actions trigger a request, how
//! pagination resets on filter changes, and how results and failures map
//! into view state. Fetches themselves are effects returned to the caller.

use flopboard_types::{Movie, WinnersPage, WinnersQuery};

use crate::query::{Pagination, year_filter_complete};
use crate::view::{FETCH_ERROR_TEXT, Phase, ViewState};

/// User or lifecycle input to the winners list.
#[derive(Debug, Clone)]
pub enum WinnersEvent {
    /// Component mounted; fetch the defaults.
    Mounted,
    /// Year filter text changed (raw, possibly partial input).
    YearEdited(String),
    /// Winner filter selected. Fires even when reselecting the current value.
    WinnerSelected(bool),
    /// Table pagination control used.
    PageChanged { current: u64, page_size: u64 },
    /// Explicit retry of the retained query after a failure.
    Retry,
    /// An in-flight fetch settled. `Err` carries the underlying message for
    /// logging only; the view never shows it.
    FetchSettled {
        seq: u64,
        outcome: Result<WinnersPage, String>,
    },
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinnersEffect {
    /// Perform the fetch and feed the result back as `FetchSettled { seq, .. }`.
    Fetch { seq: u64, query: WinnersQuery },
}

/// State machine for the paginated, filterable winners list.
#[derive(Debug, Clone, Default)]
pub struct WinnersList {
    year_input: String,
    winner: bool,
    pagination: Pagination,
    phase: Phase,
    movies: Vec<Movie>,
    error: Option<String>,
    /// Sequence number of the most recently dispatched fetch. Responses
    /// settling with an older number are stale and discarded.
    latest_seq: u64,
}

impl WinnersList {
    pub fn new() -> Self {
        Self {
            winner: true,
            ..Self::default()
        }
    }

    /// Apply one event, returning the fetch to perform, if any.
    pub fn apply(&mut self, event: WinnersEvent) -> Option<WinnersEffect> {
        match event {
            WinnersEvent::Mounted | WinnersEvent::Retry => Some(self.dispatch()),
            WinnersEvent::YearEdited(value) => {
                self.year_input = value;
                if !year_filter_complete(&self.year_input) {
                    // Partial input: keep showing the last valid result set.
                    return None;
                }
                self.pagination = Pagination::filter_reset();
                Some(self.dispatch())
            }
            WinnersEvent::WinnerSelected(value) => {
                self.winner = value;
                self.pagination = Pagination::filter_reset();
                Some(self.dispatch())
            }
            WinnersEvent::PageChanged { current, page_size } => {
                self.pagination.current = current.max(1);
                self.pagination.page_size = page_size.max(1);
                Some(self.dispatch())
            }
            WinnersEvent::FetchSettled { seq, outcome } => {
                self.settle(seq, outcome);
                None
            }
        }
    }

    fn dispatch(&mut self) -> WinnersEffect {
        self.latest_seq += 1;
        self.phase = Phase::Loading;
        WinnersEffect::Fetch {
            seq: self.latest_seq,
            query: self.query(),
        }
    }

    fn settle(&mut self, seq: u64, outcome: Result<WinnersPage, String>) {
        if seq < self.latest_seq {
            // Stale: a newer fetch was dispatched after this one started.
            return;
        }
        match outcome {
            Ok(page) => {
                self.movies = page.content;
                self.pagination.total = page.total_elements;
                self.error = None;
                self.phase = Phase::Success;
            }
            Err(_) => {
                self.error = Some(FETCH_ERROR_TEXT.to_string());
                self.phase = Phase::Error;
            }
        }
    }

    /// The query a fetch dispatched right now would carry.
    pub fn query(&self) -> WinnersQuery {
        WinnersQuery {
            page: self.pagination.current,
            page_size: self.pagination.page_size,
            year: self.year_input.clone(),
            winner: self.winner,
        }
    }

    pub fn view(&self) -> ViewState<'_> {
        ViewState {
            loading: self.phase == Phase::Loading,
            error: self.error.as_deref(),
            rows: &self.movies,
            pagination: self.pagination,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Raw filter text as typed, valid or not.
    pub fn year_input(&self) -> &str {
        &self.year_input
    }

    pub fn winner(&self) -> bool {
        self.winner
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }
}
