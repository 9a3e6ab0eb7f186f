//! Testing infrastructure for flopboard.
//!
//! - `fixtures`: canned movies, pages, and interval buckets
//! - `FakeApi`: a scripted `WinnersApi` that replays queued outcomes and
//!   records every query it receives

pub mod fake;
pub mod fixtures;

pub use fake::FakeApi;
