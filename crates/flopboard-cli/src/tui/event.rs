use crossterm::event::KeyEvent;
use flopboard_types::{IntervalBuckets, WinnersPage};

/// Everything the dashboard loop can wake up on: key input, a periodic
/// tick, or an in-flight fetch settling.
#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    WinnersSettled {
        seq: u64,
        outcome: Result<WinnersPage, String>,
    },
    IntervalsSettled {
        seq: u64,
        outcome: Result<IntervalBuckets, String>,
    },
}
