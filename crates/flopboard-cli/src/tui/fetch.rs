//! Bridges controller effects to async fetches.
//!
//! Each job is spawned on the tokio runtime; no cancellation token exists,
//! so superseded requests run to completion and settle with their original
//! sequence number. The controllers discard the stale ones.

use std::sync::Arc;
use std::sync::mpsc::Sender;

use flopboard_client::WinnersApi;
use flopboard_core::{IntervalEffect, WinnersEffect};
use flopboard_types::WinnersQuery;
use tokio::runtime::Handle;

use super::event::TuiEvent;

/// A fetch requested by one of the controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchJob {
    Winners { seq: u64, query: WinnersQuery },
    Intervals { seq: u64 },
}

impl From<WinnersEffect> for FetchJob {
    fn from(effect: WinnersEffect) -> Self {
        let WinnersEffect::Fetch { seq, query } = effect;
        FetchJob::Winners { seq, query }
    }
}

impl From<IntervalEffect> for FetchJob {
    fn from(effect: IntervalEffect) -> Self {
        let IntervalEffect::Fetch { seq } = effect;
        FetchJob::Intervals { seq }
    }
}

/// Run one job in the background, settling back over the channel.
///
/// A send failure just means the dashboard already exited.
pub fn spawn(handle: &Handle, api: Arc<dyn WinnersApi>, tx: Sender<TuiEvent>, job: FetchJob) {
    handle.spawn(async move {
        match job {
            FetchJob::Winners { seq, query } => {
                let outcome = api
                    .winners_by_year(&query)
                    .await
                    .map_err(|err| err.to_string());
                let _ = tx.send(TuiEvent::WinnersSettled { seq, outcome });
            }
            FetchJob::Intervals { seq } => {
                let outcome = api
                    .producer_intervals()
                    .await
                    .map_err(|err| err.to_string());
                let _ = tx.send(TuiEvent::IntervalsSettled { seq, outcome });
            }
        }
    });
}
