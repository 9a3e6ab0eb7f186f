//! Sync controller for the static producer-interval snapshot.
//!
//! One fetch per mount, two ranked lists out. Unlike the winners list there
//! is no query to vary; the only extra trigger is an explicit per-table
//! refresh. The port returns both buckets in one payload, so a refresh of
//! either ranking refetches the snapshot, but the rankings stay addressable
//! in the event model instead of being coupled through a widget callback.

use flopboard_types::{IntervalBuckets, ProducerInterval};

use crate::view::{FETCH_ERROR_TEXT, Phase};

/// Which ranked table an event addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Shortest gap between consecutive wins.
    Min,
    /// Longest gap between consecutive wins.
    Max,
}

#[derive(Debug, Clone)]
pub enum IntervalEvent {
    Mounted,
    Refresh(Ranking),
    FetchSettled {
        seq: u64,
        outcome: Result<IntervalBuckets, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntervalEffect {
    /// Fetch the snapshot and feed the result back as `FetchSettled`.
    Fetch { seq: u64 },
}

/// State machine for the one-shot min/max interval board.
#[derive(Debug, Clone, Default)]
pub struct IntervalBoard {
    min: Vec<ProducerInterval>,
    max: Vec<ProducerInterval>,
    phase: Phase,
    error: Option<String>,
    latest_seq: u64,
    mounted: bool,
}

impl IntervalBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: IntervalEvent) -> Option<IntervalEffect> {
        match event {
            IntervalEvent::Mounted => {
                if self.mounted {
                    // Exactly one fetch per mount.
                    return None;
                }
                self.mounted = true;
                Some(self.dispatch())
            }
            IntervalEvent::Refresh(_ranking) => Some(self.dispatch()),
            IntervalEvent::FetchSettled { seq, outcome } => {
                self.settle(seq, outcome);
                None
            }
        }
    }

    fn dispatch(&mut self) -> IntervalEffect {
        self.latest_seq += 1;
        self.phase = Phase::Loading;
        IntervalEffect::Fetch {
            seq: self.latest_seq,
        }
    }

    fn settle(&mut self, seq: u64, outcome: Result<IntervalBuckets, String>) {
        if seq < self.latest_seq {
            return;
        }
        match outcome {
            Ok(buckets) => {
                self.min = buckets.min;
                self.max = buckets.max;
                self.error = None;
                self.phase = Phase::Success;
            }
            Err(_) => {
                self.error = Some(FETCH_ERROR_TEXT.to_string());
                self.phase = Phase::Error;
            }
        }
    }

    pub fn ranking(&self, ranking: Ranking) -> &[ProducerInterval] {
        match ranking {
            Ranking::Min => &self.min,
            Ranking::Max => &self.max,
        }
    }

    pub fn loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}
