//! Pure state machines that keep flopboard's lists in sync with the remote
//! API.
//!
//! Nothing in this crate performs IO. Controllers consume events and return
//! fetch effects; the caller executes the fetch however it likes and feeds
//! the outcome back as another event. This keeps the whole fetch lifecycle
//! (trigger rules, pagination resets, stale-response suppression, error
//! presentation) unit-testable without a terminal or a network.

pub mod column;
pub mod intervals;
pub mod query;
pub mod view;
pub mod winners;

pub use column::{IntervalColumn, MovieColumn, join_sorted};
pub use intervals::{IntervalBoard, IntervalEffect, IntervalEvent, Ranking};
pub use query::{Pagination, year_filter_complete};
pub use view::{FETCH_ERROR_TEXT, Phase, ViewState};
pub use winners::{WinnersEffect, WinnersEvent, WinnersList};
