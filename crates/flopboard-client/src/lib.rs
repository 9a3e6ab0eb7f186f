//! Remote data port for the awards API.
//!
//! The controllers in `flopboard-core` talk to the API exclusively through
//! the [`WinnersApi`] trait; [`HttpApi`] is the production implementation.
//! No retry and no caching live here — a request either settles with a
//! typed payload or fails.

pub mod error;
mod http;

use async_trait::async_trait;
use flopboard_types::{IntervalBuckets, WinnersPage, WinnersQuery};

pub use error::{Error, Result};
pub use http::HttpApi;

/// Asynchronous access to the award-winner endpoints.
#[async_trait]
pub trait WinnersApi: Send + Sync {
    /// Server-side paginated winners search.
    async fn winners_by_year(&self, query: &WinnersQuery) -> Result<WinnersPage>;

    /// One-shot min/max producer-interval snapshot.
    async fn producer_intervals(&self) -> Result<IntervalBuckets>;
}
